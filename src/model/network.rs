//! Network record.

use serde::{Deserialize, Serialize};

/// Kind of the active network link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    WiFi,
    Mobile,
    Ethernet,
    None,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSnapshot {
    pub connection_type: Option<ConnectionType>,
    pub carrier_name: Option<String>,
    /// Signal strength in dBm. No unprivileged source exists on either platform.
    pub signal_strength: Option<i64>,
    pub is_vpn_active: Option<bool>,
    pub is_roaming: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_type_wire_names() {
        let json = serde_json::to_value(NetworkSnapshot {
            connection_type: Some(ConnectionType::WiFi),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["connectionType"], "WiFi");
        assert!(json["signalStrength"].is_null());
    }
}
