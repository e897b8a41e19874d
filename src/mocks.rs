use crate::config::Parity;
use crate::frame::CanFrame;
use crate::interface::{EndpointResolver, NetworkEndpoint};
use crate::transport::Transport;
use mockall::mock;
use std::sync::{Arc, Mutex};

mock! {
    pub SerialPort {}

    impl Transport for SerialPort {
        type Error = u32;

        fn open(&mut self) -> Result<(), u32>;
        fn close(&mut self);
        fn register_receiver(&mut self);
        fn unregister_receiver(&mut self);
        fn set_baud_rate(&mut self, baud_rate: u32);
        fn set_parity(&mut self, parity: Parity);
        fn set_flow_control(&mut self, enabled: bool);
        fn write(&mut self, bytes: &[u8]) -> Result<usize, u32>;
    }
}

mock! {
    pub Interface {}

    impl NetworkEndpoint for Interface {
        type Error = u32;

        fn inject(&mut self, frame: &CanFrame) -> Result<(), u32>;
        fn install_transmit_interceptor(&mut self);
        fn restore_transmit_path(&mut self);
        fn release(&mut self);
    }
}

mock! {
    pub Resolver {}

    impl EndpointResolver for Resolver {
        type Endpoint = MockInterface;

        fn resolve(&mut self, name: &str) -> Option<MockInterface>;
    }
}

/// Serial port recording all written bytes
#[derive(Default, Clone)]
pub struct RecordingSerialPort {
    pub written: Arc<Mutex<Vec<u8>>>,
}

impl Transport for RecordingSerialPort {
    type Error = ();

    fn open(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn close(&mut self) {}

    fn register_receiver(&mut self) {}

    fn unregister_receiver(&mut self) {}

    fn set_baud_rate(&mut self, _baud_rate: u32) {}

    fn set_parity(&mut self, _parity: Parity) {}

    fn set_flow_control(&mut self, _enabled: bool) {}

    fn write(&mut self, bytes: &[u8]) -> Result<usize, ()> {
        self.written.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }
}

/// Network interface recording all injected frames
#[derive(Default, Clone)]
pub struct RecordingInterface {
    pub injected: Arc<Mutex<Vec<CanFrame>>>,
}

impl NetworkEndpoint for RecordingInterface {
    type Error = ();

    fn inject(&mut self, frame: &CanFrame) -> Result<(), ()> {
        self.injected.lock().unwrap().push(*frame);
        Ok(())
    }

    fn install_transmit_interceptor(&mut self) {}

    fn restore_transmit_path(&mut self) {}

    fn release(&mut self) {}
}

/// Resolves any name to a clone of the given interface
pub struct RecordingResolver {
    pub interface: RecordingInterface,
}

impl EndpointResolver for RecordingResolver {
    type Endpoint = RecordingInterface;

    fn resolve(&mut self, _name: &str) -> Option<RecordingInterface> {
        Some(self.interface.clone())
    }
}
