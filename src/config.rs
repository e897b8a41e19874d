//!# Bridge configuration
//! Defaults match a `vcan0` interface behind a 230400 baud 8N1 link without flow control.
//!
//! ```
//!# use uart_can_bridge::config::{BridgeConfiguration, LinkConfiguration, Parity};
//!#
//! let config = BridgeConfiguration {
//!     interface: "can1".into(),
//!     link: LinkConfiguration {
//!         baud_rate: 115_200,
//!         parity: Parity::Even,
//!         flow_control: true,
//!     },
//!     ..Default::default()
//! };
//!
//! assert_eq!(256, config.rx_capacity);
//! ```
use crate::assembler::DEFAULT_RX_CAPACITY;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Name of the network interface resolved by default
pub const DEFAULT_INTERFACE: &str = "vcan0";

/// Default serial baud rate
pub const DEFAULT_BAUD_RATE: u32 = 230_400;

/// Entire configuration of a bridge
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfiguration {
    /// Name of the network interface frames are injected into
    pub interface: String,

    /// Size of the RX buffer in bytes
    pub rx_capacity: usize,

    /// Serial link parameters
    pub link: LinkConfiguration,

    /// Text written to the serial link once the transport is configured
    pub greeting: Option<String>,
}

impl Default for BridgeConfiguration {
    fn default() -> Self {
        Self {
            interface: DEFAULT_INTERFACE.into(),
            rx_capacity: DEFAULT_RX_CAPACITY,
            link: LinkConfiguration::default(),
            greeting: None,
        }
    }
}

/// Serial link parameters, passed through to the transport as is
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfiguration {
    pub baud_rate: u32,

    pub parity: Parity,

    /// Hardware flow control (RTS/CTS)
    pub flow_control: bool,
}

impl Default for LinkConfiguration {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            parity: Parity::default(),
            flow_control: false,
        }
    }
}

/// Serial parity mode
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    None,
    Even,
    Odd,
}

impl Default for Parity {
    fn default() -> Self {
        Self::None
    }
}
