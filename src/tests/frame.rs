use crate::frame::{masked_id, CanFrame};
use embedded_can::{ExtendedId, Frame, Id, StandardId};

const STANDARD_ID: u16 = 0x6A5;
const EXTENDED_ID: u32 = 0x14C92A2B;

#[test]
fn test_new_standard_id() {
    let frame = CanFrame::new(StandardId::new(STANDARD_ID).unwrap(), &[1, 2, 3]).unwrap();

    assert_eq!(STANDARD_ID, frame.raw_id());
    assert_eq!(Id::Standard(StandardId::new(STANDARD_ID).unwrap()), frame.id());
    assert_eq!(3, frame.dlc());
    assert_eq!(&[1, 2, 3], frame.data());
    assert!(!frame.is_extended());
    assert!(!frame.is_remote_frame());
}

#[test]
fn test_new_empty_payload() {
    let frame = CanFrame::new(StandardId::ZERO, &[]).unwrap();

    assert_eq!(0, frame.dlc());
    assert!(frame.data().is_empty());
}

#[test]
fn test_new_extended_id_rejected() {
    let id = ExtendedId::new(EXTENDED_ID).unwrap();

    assert!(CanFrame::new(id, &[1]).is_none());
}

#[test]
fn test_new_payload_too_long() {
    assert!(CanFrame::new(StandardId::MAX, &[0u8; 9]).is_none());
    assert!(CanFrame::new(StandardId::MAX, &[0u8; 8]).is_some());
}

#[test]
fn test_new_remote_unsupported() {
    assert!(CanFrame::new_remote(StandardId::MAX, 2).is_none());
}

#[test]
fn test_masked_id() {
    assert_eq!(0x001, masked_id(0x0001).as_raw());
    assert_eq!(0x7FF, masked_id(0x07FF).as_raw());
    assert_eq!(0x001, masked_id(0x0801).as_raw());
    assert_eq!(0x7FF, masked_id(0xFFFF).as_raw());
}
