//!# Serial transport
//! Byte oriented link the bridge is attached to. The host routes received bytes into
//! [Bridge::on_received](crate::bridge::Bridge::on_received) while the receiver is registered.
use crate::config::Parity;
use core::fmt::Debug;

pub trait Transport {
    type Error: Debug;

    /// Opens the serial port
    fn open(&mut self) -> Result<(), Self::Error>;

    /// Closes the serial port
    fn close(&mut self);

    /// Routes received bytes to the bridge
    fn register_receiver(&mut self);

    /// Stops routing received bytes to the bridge
    fn unregister_receiver(&mut self);

    fn set_baud_rate(&mut self, baud_rate: u32);

    fn set_parity(&mut self, parity: Parity);

    fn set_flow_control(&mut self, enabled: bool);

    /// Writes the bytes without blocking, returns the number of bytes accepted
    fn write(&mut self, bytes: &[u8]) -> Result<usize, Self::Error>;
}
