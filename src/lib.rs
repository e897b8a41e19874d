#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]

//! # UART to CAN bridge
//!
//! Translates between a raw serial byte stream and CAN frames of a (virtual) network interface.
//!
//! Crate currently offer the following features:
//! * Simple serial framing: `0xAA`, 2 bytes big endian ID, length, up to 8 data bytes
//! * Self-healing resynchronization on noise and corrupted headers
//! * Bounded RX buffer with explicit overflow policy (buffered bytes are discarded)
//! * Concurrent receive and transmit paths guarded by a critical section
//! * no_std support
//!
//!## Bridge example
//!
//!```
//!use uart_can_bridge::bridge::{Bridge, TransmitOutcome};
//!use uart_can_bridge::config::BridgeConfiguration;
//!use uart_can_bridge::example::{ExampleResolver, ExampleSerialPort};
//!use uart_can_bridge::frame::CanFrame;
//!use embedded_can::{Frame, StandardId};
//!
//!let bridge = Bridge::new(BridgeConfiguration::default());
//!
//! // Resolves "vcan0", opens and configures the serial port
//!let mut resolver = ExampleResolver::default();
//!bridge.bind(ExampleSerialPort::default(), &mut resolver).unwrap();
//!
//! // Serial -> CAN: leading noise byte is skipped
//!let injected = bridge.on_received(&[0xFF, 0xAA, 0x01, 0x23, 0x02, 0xCA, 0xFE]);
//!assert_eq!(1, injected);
//!
//! // CAN -> serial
//!let frame = CanFrame::new(StandardId::new(0x42).unwrap(), &[1, 2, 3]).unwrap();
//!assert_eq!(TransmitOutcome::Sent, bridge.on_transmit(frame));
//!
//!bridge.unbind();
//!```

extern crate alloc;

pub mod assembler;
pub mod bridge;
pub mod codec;
pub mod config;
pub mod frame;
pub mod header;
pub mod interface;
pub mod transport;

pub mod example;
#[cfg(test)]
pub(crate) mod mocks;
mod mutex;
#[cfg(test)]
mod tests;
