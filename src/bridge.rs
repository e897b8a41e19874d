//!# UART to CAN bridge
//! Connects a serial [Transport] with a [NetworkEndpoint]:
//! * Received bytes are assembled into frames and injected into the network interface
//! * Frames the interface wants to send are encoded and written to the serial link
//!
//! Both directions may be invoked concurrently from different contexts. The binding
//! (transport, endpoint and RX buffer) is guarded by a single critical section lock.
//! Per frame failures are logged and counted, but never unbind the bridge.
//!
//!```
//!# use uart_can_bridge::bridge::{BindError, Bridge};
//!# use uart_can_bridge::config::BridgeConfiguration;
//!# use uart_can_bridge::example::{ExampleResolver, ExampleSerialPort};
//!#
//! let bridge = Bridge::new(BridgeConfiguration::default());
//! let mut resolver = ExampleResolver::default();
//!
//! bridge.bind(ExampleSerialPort::default(), &mut resolver).unwrap();
//! assert!(bridge.is_bound());
//!
//! // Only one binding at a time
//! let result = bridge.bind(ExampleSerialPort::default(), &mut resolver);
//! assert_eq!(Err(BindError::AlreadyBound), result);
//!
//! assert!(bridge.unbind());
//! assert!(!bridge.unbind());
//! ```
use crate::assembler::{RxAssembler, RxStatistics};
use crate::codec::encode;
use crate::config::BridgeConfiguration;
use crate::frame::CanFrame;
use crate::interface::{EndpointResolver, NetworkEndpoint};
use crate::mutex::Mutex;
use crate::transport::Transport;
use embedded_can::Frame;
use log::{debug, error, info, warn};

/// Possible errors when binding the bridge
#[derive(Debug, PartialEq)]
pub enum BindError<E> {
    /// Configured network interface could not be resolved
    EndpointNotFound,
    /// Serial port could not be opened
    TransportUnavailable(E),
    /// Bridge is already bound
    AlreadyBound,
}

/// Disposition of a frame handed to [Bridge::on_transmit]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransmitOutcome {
    /// Frame was written to the serial link
    Sent,
    /// Frame was dropped
    Dropped(DropReason),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// Bridge is not bound (anymore)
    NotBound,
    /// Lock is already held by the calling context
    Busy,
    /// Extended ID, remote frame or more than 8 data bytes
    Malformed,
    /// Serial write failed or was incomplete
    TransportUnavailable,
}

/// Cause of tearing down the binding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnbindReason {
    /// Explicit unbind or bridge dropped
    Requested,
    /// Serial port went away, it's not closed again
    TransportClosed,
    /// Network interface went away, its transmit path is not restored
    EndpointRemoved,
}

/// Counters of a single binding
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct BridgeStatistics {
    /// RX assembler counters
    pub rx: RxStatistics,
    /// Frames injected into the network interface
    pub injected: usize,
    /// Decoded frames the network interface refused
    pub inject_failures: usize,
    /// Frames written to the serial link
    pub transmitted: usize,
    /// Frames lost due to serial write errors
    pub transmit_failures: usize,
    /// Frames which can't be expressed on the serial link
    pub malformed: usize,
}

/// Live association of one transport with one network endpoint
struct Binding<T: Transport, E: NetworkEndpoint> {
    transport: T,
    endpoint: E,
    assembler: RxAssembler,
    statistics: BridgeStatistics,
}

impl<T: Transport, E: NetworkEndpoint> Binding<T, E> {
    fn new(transport: T, endpoint: E, rx_capacity: usize) -> Self {
        Self {
            transport,
            endpoint,
            assembler: RxAssembler::new(rx_capacity),
            statistics: BridgeStatistics::default(),
        }
    }

    /// Injects all frames completed by the received bytes, returns the number of injected frames
    fn receive(&mut self, bytes: &[u8]) -> usize {
        debug!("Received {} bytes: {:02x?}", bytes.len(), bytes);

        let mut injected = 0;

        for frame in self.assembler.feed(bytes) {
            match self.endpoint.inject(&frame) {
                Ok(()) => {
                    debug!(
                        "Injected CAN frame (ID: 0x{:03X}, DLC: {}): {:02x?}",
                        frame.raw_id(),
                        frame.dlc(),
                        frame.data()
                    );
                    self.statistics.injected += 1;
                    injected += 1;
                }
                Err(error) => {
                    error!("Failed to inject CAN frame 0x{:03X}: {error:?}", frame.raw_id());
                    self.statistics.inject_failures += 1;
                }
            }
        }

        injected
    }

    fn transmit<F: Frame>(&mut self, frame: &F) -> TransmitOutcome {
        let Some(frame) = to_can_frame(frame) else {
            warn!("Dropping frame which can't be sent over serial: {:?}", frame.id());
            self.statistics.malformed += 1;
            return TransmitOutcome::Dropped(DropReason::Malformed);
        };

        let bytes = encode(&frame);

        match self.transport.write(&bytes) {
            Ok(written) if written == bytes.len() => {
                debug!(
                    "Transmitted CAN frame (ID: 0x{:03X}, DLC: {}): {:02x?}",
                    frame.raw_id(),
                    frame.dlc(),
                    frame.data()
                );
                self.statistics.transmitted += 1;
                TransmitOutcome::Sent
            }
            Ok(written) => {
                warn!("Serial write incomplete ({written} of {} bytes), frame lost", bytes.len());
                self.statistics.transmit_failures += 1;
                TransmitOutcome::Dropped(DropReason::TransportUnavailable)
            }
            Err(error) => {
                warn!("Serial write failed, frame 0x{:03X} lost: {error:?}", frame.raw_id());
                self.statistics.transmit_failures += 1;
                TransmitOutcome::Dropped(DropReason::TransportUnavailable)
            }
        }
    }

    /// Releases all external handles
    fn teardown(mut self, reason: UnbindReason) {
        if reason != UnbindReason::EndpointRemoved {
            self.endpoint.restore_transmit_path();
        }

        self.transport.unregister_receiver();

        if reason != UnbindReason::TransportClosed {
            self.transport.close();
        }

        self.endpoint.release();
    }

    fn statistics(&self) -> BridgeStatistics {
        BridgeStatistics {
            rx: self.assembler.statistics(),
            ..self.statistics
        }
    }
}

/// Converts any frame to a serial compatible frame
fn to_can_frame<F: Frame>(frame: &F) -> Option<CanFrame> {
    if frame.is_remote_frame() {
        return None;
    }

    <CanFrame as Frame>::new(frame.id(), frame.data())
}

/// Bidirectional bridge between serial transport and network endpoint
pub struct Bridge<T: Transport, E: NetworkEndpoint> {
    config: BridgeConfiguration,

    /// `None` while unbound
    binding: Mutex<Option<Binding<T, E>>>,
}

impl<T: Transport, E: NetworkEndpoint> Bridge<T, E> {
    pub fn new(config: BridgeConfiguration) -> Self {
        Self {
            config,
            binding: Mutex::new(None),
        }
    }

    /// Resolves the configured network interface, opens and configures the transport and
    /// intercepts the transmit path of the interface
    pub fn bind<R>(&self, transport: T, resolver: &mut R) -> Result<(), BindError<T::Error>>
    where
        R: EndpointResolver<Endpoint = E>,
    {
        let result = self.binding.access(|binding| {
            if binding.is_some() {
                warn!("Bridge is already bound");
                return Err(BindError::AlreadyBound);
            }

            let new_binding = self.attach(transport, resolver)?;
            *binding = Some(new_binding);

            Ok(())
        });

        result.unwrap_or_else(|| {
            warn!("Bind attempted from within a bridge callback");
            Err(BindError::AlreadyBound)
        })
    }

    /// Handles bytes received by the transport, returns the number of injected frames
    pub fn on_received(&self, bytes: &[u8]) -> usize {
        let injected = self.binding.access(|binding| match binding {
            Some(binding) => binding.receive(bytes),
            None => {
                warn!("Bridge not bound, dropping {} received bytes", bytes.len());
                0
            }
        });

        injected.unwrap_or_else(|| {
            warn!("Re-entrant receive, dropping {} bytes", bytes.len());
            0
        })
    }

    /// Sends a frame the network interface wants to transmit.
    /// The frame is consumed regardless of the outcome.
    pub fn on_transmit<F: Frame>(&self, frame: F) -> TransmitOutcome {
        let outcome = self.binding.access(|binding| match binding {
            Some(binding) => binding.transmit(&frame),
            None => {
                warn!("Bridge not bound, dropping frame {:?}", frame.id());
                TransmitOutcome::Dropped(DropReason::NotBound)
            }
        });

        outcome.unwrap_or_else(|| {
            warn!("Re-entrant transmit, dropping frame {:?}", frame.id());
            TransmitOutcome::Dropped(DropReason::Busy)
        })
    }

    /// Tears down the binding. Returns false if the bridge was not bound.
    pub fn unbind(&self) -> bool {
        self.unbind_with(UnbindReason::Requested)
    }

    /// Tears down the binding after the serial port was closed by the host
    pub fn transport_closed(&self) -> bool {
        self.unbind_with(UnbindReason::TransportClosed)
    }

    /// Tears down the binding after the network interface was removed
    pub fn endpoint_removed(&self) -> bool {
        self.unbind_with(UnbindReason::EndpointRemoved)
    }

    /// True while a binding exists.
    /// Also true when called from within a collaborator callback, as the calling bridge
    /// operation holds the binding at that time.
    pub fn is_bound(&self) -> bool {
        self.binding.access(|binding| binding.is_some()).unwrap_or(true)
    }

    /// Counters of the current binding, `None` if unbound or called from within a callback
    pub fn statistics(&self) -> Option<BridgeStatistics> {
        self.binding
            .access(|binding| binding.as_ref().map(Binding::statistics))
            .flatten()
    }

    /// Number of buffered RX bytes not yet consumed by a frame
    pub fn rx_pending(&self) -> usize {
        self.binding
            .access(|binding| binding.as_ref().map_or(0, |binding| binding.assembler.pending()))
            .unwrap_or_default()
    }

    pub fn config(&self) -> &BridgeConfiguration {
        &self.config
    }

    fn attach<R>(&self, mut transport: T, resolver: &mut R) -> Result<Binding<T, E>, BindError<T::Error>>
    where
        R: EndpointResolver<Endpoint = E>,
    {
        let interface = self.config.interface.as_str();

        let Some(mut endpoint) = resolver.resolve(interface) else {
            error!("Interface '{interface}' not found");
            return Err(BindError::EndpointNotFound);
        };
        info!("Interface '{interface}' resolved");

        transport.register_receiver();

        if let Err(error) = transport.open() {
            error!("Failed to open serial port: {error:?}");
            transport.unregister_receiver();
            endpoint.release();
            return Err(BindError::TransportUnavailable(error));
        }

        let link = &self.config.link;
        transport.set_baud_rate(link.baud_rate);
        transport.set_flow_control(link.flow_control);
        transport.set_parity(link.parity);

        if let Some(greeting) = &self.config.greeting {
            if let Err(error) = transport.write(greeting.as_bytes()) {
                warn!("Failed to write greeting: {error:?}");
            }
        }

        endpoint.install_transmit_interceptor();

        info!(
            "Bridge bound to '{interface}' ({} baud, parity {:?}, flow control {})",
            link.baud_rate, link.parity, link.flow_control
        );

        Ok(Binding::new(transport, endpoint, self.config.rx_capacity))
    }

    fn unbind_with(&self, reason: UnbindReason) -> bool {
        // State is flipped under the lock, handles are released afterwards
        let Some(binding) = self.binding.access(Option::take) else {
            warn!("Unbind ({reason:?}) attempted from within a bridge callback");
            return false;
        };

        match binding {
            Some(binding) => {
                binding.teardown(reason);
                info!("Bridge unbound ({reason:?})");
                true
            }
            None => false,
        }
    }
}

impl<T: Transport, E: NetworkEndpoint> Drop for Bridge<T, E> {
    fn drop(&mut self) {
        if let Some(binding) = self.binding.get_mut().take() {
            binding.teardown(UnbindReason::Requested);
            info!("Bridge unbound on drop");
        }
    }
}
