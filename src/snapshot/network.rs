//! Network record.

use super::DeviceInspector;
use crate::collector::host::{HostStats, NetInterface};
use crate::collector::traits::FileSystem;
use crate::config::Platform;
use crate::model::{ConnectionType, NetworkSnapshot};

/// Interface name prefixes per link kind, highest priority first.
const ANDROID_LINKS: &[(&str, ConnectionType)] = &[
    ("wlan", ConnectionType::WiFi),
    ("eth", ConnectionType::Ethernet),
    ("rmnet", ConnectionType::Mobile),
    ("ccmni", ConnectionType::Mobile),
    ("seth", ConnectionType::Mobile),
];

/// `en0` is the Wi-Fi radio on every iPhone and iPad.
const IOS_LINKS: &[(&str, ConnectionType)] = &[
    ("en0", ConnectionType::WiFi),
    ("en", ConnectionType::Ethernet),
    ("pdp_ip", ConnectionType::Mobile),
];

const ANDROID_VPN: &[&str] = &["tun", "ppp", "ipsec", "wg"];

/// `utun` is always up on iOS for system services and says nothing.
const IOS_VPN: &[&str] = &["ppp", "ipsec"];

fn is_up_with_prefix(interfaces: &[NetInterface], prefix: &str) -> bool {
    interfaces
        .iter()
        .any(|iface| iface.is_up && iface.name.starts_with(prefix))
}

/// Picks the highest priority link kind with an up interface.
pub fn classify_connection(platform: Platform, interfaces: &[NetInterface]) -> ConnectionType {
    let links = match platform {
        Platform::Android => ANDROID_LINKS,
        Platform::Ios => IOS_LINKS,
    };
    links
        .iter()
        .find(|(prefix, _)| is_up_with_prefix(interfaces, prefix))
        .map_or(ConnectionType::None, |(_, kind)| *kind)
}

/// True when a tunnel interface is up.
pub fn vpn_active(platform: Platform, interfaces: &[NetInterface]) -> bool {
    let prefixes = match platform {
        Platform::Android => ANDROID_VPN,
        Platform::Ios => IOS_VPN,
    };
    prefixes
        .iter()
        .any(|prefix| is_up_with_prefix(interfaces, prefix))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

impl<F: FileSystem + Clone, H: HostStats> DeviceInspector<F, H> {
    /// Link kind, carrier and tunnel state.
    ///
    /// A failed interface query leaves both link fields `None`. Carrier and
    /// roaming come from telephony properties, which only Android exposes.
    pub fn network_info(&self) -> NetworkSnapshot {
        let platform = self.platform();
        let interfaces = self.host.network_interfaces();
        if interfaces.is_none() {
            tracing::debug!("network interfaces unavailable");
        }

        let (carrier_name, is_roaming) = match platform {
            Platform::Android => {
                let props = self.properties();
                (
                    props.first("gsm.operator.alpha"),
                    props
                        .first("gsm.operator.isroaming")
                        .and_then(|v| parse_flag(&v)),
                )
            }
            Platform::Ios => (None, None),
        };

        NetworkSnapshot {
            connection_type: interfaces
                .as_deref()
                .map(|ifs| classify_connection(platform, ifs)),
            carrier_name,
            signal_strength: None,
            is_vpn_active: interfaces.as_deref().map(|ifs| vpn_active(platform, ifs)),
            is_roaming,
        }
    }
}
