//!# Network interface
//! Frame oriented endpoint (e.g. a virtual CAN interface) on the other side of the bridge.
use crate::frame::CanFrame;
use core::fmt::Debug;

/// Looks up network interfaces by name
pub trait EndpointResolver {
    type Endpoint: NetworkEndpoint;

    /// Returns a handle to the named interface, `None` if it does not exist
    fn resolve(&mut self, name: &str) -> Option<Self::Endpoint>;
}

/// Handle to a resolved network interface
pub trait NetworkEndpoint {
    type Error: Debug;

    /// Hands a received frame to the network stack
    fn inject(&mut self, frame: &CanFrame) -> Result<(), Self::Error>;

    /// Routes frames the interface wants to send to
    /// [Bridge::on_transmit](crate::bridge::Bridge::on_transmit)
    fn install_transmit_interceptor(&mut self);

    /// Restores the transmit path which was active before the interceptor got installed
    fn restore_transmit_path(&mut self);

    /// Releases the handle obtained by [EndpointResolver::resolve]
    fn release(&mut self);
}
