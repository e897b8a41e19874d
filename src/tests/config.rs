use crate::config::{BridgeConfiguration, LinkConfiguration, Parity, DEFAULT_BAUD_RATE, DEFAULT_INTERFACE};

#[test]
fn test_bridge_configuration_default() {
    let config = BridgeConfiguration::default();

    assert_eq!("vcan0", config.interface);
    assert_eq!(DEFAULT_INTERFACE, config.interface);
    assert_eq!(256, config.rx_capacity);
    assert_eq!(None, config.greeting);
}

#[test]
fn test_link_configuration_default() {
    assert_eq!(
        LinkConfiguration {
            baud_rate: 230_400,
            parity: Parity::None,
            flow_control: false,
        },
        LinkConfiguration::default()
    );
    assert_eq!(DEFAULT_BAUD_RATE, LinkConfiguration::default().baud_rate);
}
