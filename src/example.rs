//! # Dummy collaborators for doc examples
//!
//! Serial port and network interface which accept everything and keep nothing
use crate::config::{Parity, DEFAULT_INTERFACE};
use crate::frame::CanFrame;
use crate::interface::{EndpointResolver, NetworkEndpoint};
use crate::transport::Transport;
use core::convert::Infallible;

#[derive(Default, Debug)]
pub struct ExampleSerialPort {}

impl Transport for ExampleSerialPort {
    type Error = Infallible;

    fn open(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn close(&mut self) {}

    fn register_receiver(&mut self) {}

    fn unregister_receiver(&mut self) {}

    fn set_baud_rate(&mut self, _baud_rate: u32) {}

    fn set_parity(&mut self, _parity: Parity) {}

    fn set_flow_control(&mut self, _enabled: bool) {}

    fn write(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        Ok(bytes.len())
    }
}

#[derive(Default, Debug)]
pub struct ExampleInterface {}

impl NetworkEndpoint for ExampleInterface {
    type Error = Infallible;

    fn inject(&mut self, _frame: &CanFrame) -> Result<(), Self::Error> {
        Ok(())
    }

    fn install_transmit_interceptor(&mut self) {}

    fn restore_transmit_path(&mut self) {}

    fn release(&mut self) {}
}

/// Resolves the default interface name only
#[derive(Default, Debug)]
pub struct ExampleResolver {}

impl EndpointResolver for ExampleResolver {
    type Endpoint = ExampleInterface;

    fn resolve(&mut self, name: &str) -> Option<Self::Endpoint> {
        if name != DEFAULT_INTERFACE {
            return None;
        }

        Some(ExampleInterface::default())
    }
}
