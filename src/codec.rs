//!# Frame codec
//! Stateless conversion between [CanFrame] and its serial representation:
//!
//! | Sync   | ID (big endian) | Length | Payload        |
//! |--------|-----------------|--------|----------------|
//! | `0xAA` | 2 bytes         | 0..=8  | `Length` bytes |
//!
//! ```
//!# use uart_can_bridge::codec::{decode, encode, Decoded};
//!# use uart_can_bridge::frame::CanFrame;
//!# use embedded_can::{Frame, StandardId};
//!#
//! let frame = CanFrame::new(StandardId::new(0x1).unwrap(), &[0x10, 0x20]).unwrap();
//! let bytes = encode(&frame);
//! assert_eq!(&[0xAA, 0x00, 0x01, 0x02, 0x10, 0x20], &bytes[..]);
//!
//! assert_eq!(Decoded::Frame { frame, consumed: 6 }, decode(&bytes, 0));
//! assert_eq!(Decoded::Incomplete, decode(&bytes[..5], 0));
//! ```
use crate::frame::{masked_id, CanFrame, MAX_PAYLOAD_CAN_2_0};
use crate::header::{WireHeader, HEADER_LEN, SYNC_BYTE};
use bytes::{BufMut, Bytes, BytesMut};

/// Max. size of a single encoded frame
pub const MAX_FRAME_LEN: usize = HEADER_LEN + MAX_PAYLOAD_CAN_2_0;

/// Result of a single decode attempt
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Not enough bytes yet, caller keeps the bytes and waits for more
    Incomplete,
    /// Byte at the offset can't start a frame, caller skips exactly one byte
    Resync(ResyncCause),
    /// Complete frame
    Frame {
        frame: CanFrame,
        /// Number of bytes the frame occupied (header + payload)
        consumed: usize,
    },
}

/// Reason for skipping a byte
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResyncCause {
    /// Byte at the offset is not the sync marker
    MissingSync(u8),
    /// Header declares more than 8 payload bytes
    InvalidLength(u8),
}

/// Encodes the frame into a new buffer
pub fn encode(frame: &CanFrame) -> Bytes {
    let mut buffer = BytesMut::with_capacity(HEADER_LEN + frame.dlc);
    encode_into(frame, &mut buffer);

    buffer.freeze()
}

/// Appends the encoded frame to the given buffer
pub fn encode_into(frame: &CanFrame, buffer: &mut BytesMut) {
    let header = WireHeader::for_frame(frame.raw_id(), frame.dlc as u8);

    buffer.reserve(HEADER_LEN + frame.dlc);
    buffer.put_slice(&header.into_bytes());
    buffer.put_slice(&frame.data[..frame.dlc]);
}

/// Attempts to parse one frame starting at `offset`
pub fn decode(bytes: &[u8], offset: usize) -> Decoded {
    let window = bytes.get(offset..).unwrap_or_default();

    // Nothing is judged before a full header is available
    let Some(raw_header) = window.get(..HEADER_LEN) else {
        return Decoded::Incomplete;
    };

    if raw_header[0] != SYNC_BYTE {
        return Decoded::Resync(ResyncCause::MissingSync(raw_header[0]));
    }

    let mut header_bytes = [0u8; HEADER_LEN];
    header_bytes.copy_from_slice(raw_header);
    let header = WireHeader::from_bytes(header_bytes);

    let dlc = header.dlc() as usize;
    if dlc > MAX_PAYLOAD_CAN_2_0 {
        return Decoded::Resync(ResyncCause::InvalidLength(header.dlc()));
    }

    let consumed = HEADER_LEN + dlc;
    let Some(payload) = window.get(HEADER_LEN..consumed) else {
        return Decoded::Incomplete;
    };

    let mut frame = CanFrame {
        identifier: masked_id(header.identifier()),
        dlc,
        data: [0; MAX_PAYLOAD_CAN_2_0],
    };
    frame.data[..dlc].copy_from_slice(payload);

    Decoded::Frame { frame, consumed }
}
