#![allow(unused_braces)]
use modular_bitfield_msb::prelude::*;

/// Start of frame marker on the serial link
pub const SYNC_BYTE: u8 = 0xAA;

/// Size of the encoded header: sync, 2 bytes identifier, length
pub const HEADER_LEN: usize = 4;

#[bitfield(bits = 32)]
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
/// Wire header preceding the payload bytes of every frame
pub struct WireHeader {
    /// Start of frame marker, must be [SYNC_BYTE]
    pub sync: B8,
    /// Upper identifier bits, ignored by the receiver
    #[skip]
    __: B5,
    /// Standard identifier, big endian on the wire
    pub identifier: B11,
    /// Number of payload bytes following the header
    pub dlc: B8,
}

impl WireHeader {
    /// Creates a header for the given identifier and payload length
    pub(crate) fn for_frame(identifier: u16, dlc: u8) -> Self {
        Self::new()
            .with_sync(SYNC_BYTE)
            .with_identifier(identifier)
            .with_dlc(dlc)
    }

    /// True if the header starts with the sync marker
    pub fn is_synced(&self) -> bool {
        self.sync() == SYNC_BYTE
    }
}
