//!# CAN frame
//! Classic CAN frame with a standard (11 bit) identifier and up to 8 data bytes,
//! which is everything the serial wire format is able to carry.
//!
//! ```
//!# use uart_can_bridge::frame::CanFrame;
//!# use embedded_can::{Frame, StandardId};
//!#
//! let id = StandardId::new(0x123).unwrap();
//! let frame = CanFrame::new(id, &[0x10, 0x20]).unwrap();
//!
//! assert_eq!(2, frame.dlc());
//! assert_eq!(&[0x10, 0x20], frame.data());
//! ```
use embedded_can::{Frame, Id, StandardId};

/// Identifier bits kept by the receiver
pub const STANDARD_IDENTIFIER_MASK: u16 = 0x7FF;

/// Max. number of data bytes of a classic CAN frame
pub const MAX_PAYLOAD_CAN_2_0: usize = 8;

/// Builds an identifier from raw bits, everything above bit 10 is dropped
pub(crate) fn masked_id(raw: u16) -> StandardId {
    StandardId::new(raw & STANDARD_IDENTIFIER_MASK).unwrap_or(StandardId::MAX)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanFrame {
    pub(crate) identifier: StandardId,
    pub(crate) dlc: usize,
    pub(crate) data: [u8; MAX_PAYLOAD_CAN_2_0],
}

impl CanFrame {
    /// Returns the raw 11 bit identifier
    pub fn raw_id(&self) -> u16 {
        self.identifier.as_raw()
    }

    /// Returns the standard identifier
    pub fn standard_id(&self) -> StandardId {
        self.identifier
    }
}

impl Frame for CanFrame {
    /// Creates a new data frame. Returns `None` for extended identifiers
    /// or more than 8 data bytes.
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        let Id::Standard(identifier) = id.into() else {
            return None;
        };

        if data.len() > MAX_PAYLOAD_CAN_2_0 {
            return None;
        }

        let mut frame = CanFrame {
            identifier,
            dlc: data.len(),
            data: [0; MAX_PAYLOAD_CAN_2_0],
        };
        frame.data[..data.len()].copy_from_slice(data);
        Some(frame)
    }

    /// Remote frames can't be expressed on the serial link
    fn new_remote(_id: impl Into<Id>, _dlc: usize) -> Option<Self> {
        None
    }

    fn is_extended(&self) -> bool {
        false
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        Id::Standard(self.identifier)
    }

    fn dlc(&self) -> usize {
        self.dlc
    }

    fn data(&self) -> &[u8] {
        &self.data[..self.dlc]
    }
}
