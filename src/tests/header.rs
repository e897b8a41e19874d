use crate::header::{WireHeader, SYNC_BYTE};

#[test]
fn test_header_for_frame() {
    assert_eq!([0xAA, 0x06, 0xA5, 0x08], WireHeader::for_frame(0x6A5, 8).into_bytes());
    assert_eq!([0xAA, 0x00, 0x01, 0x02], WireHeader::for_frame(0x001, 2).into_bytes());
}

#[test]
fn test_header_from_bytes() {
    let header = WireHeader::from_bytes([0xAA, 0x07, 0xFF, 0x03]);

    assert!(header.is_synced());
    assert_eq!(0x7FF, header.identifier());
    assert_eq!(3, header.dlc());
}

#[test]
fn test_header_upper_identifier_bits_ignored() {
    let header = WireHeader::from_bytes([0xAA, 0xF8, 0x01, 0x00]);

    assert_eq!(0x001, header.identifier());
}

#[test]
fn test_header_not_synced() {
    let header = WireHeader::from_bytes([0x55, 0x00, 0x01, 0x00]);

    assert!(!header.is_synced());
    assert_eq!(0x55, header.sync());
    assert_ne!(SYNC_BYTE, header.sync());
}
