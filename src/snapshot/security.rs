//! Security posture record.

use super::DeviceInspector;
use crate::classify::is_compromised;
use crate::collector::host::HostStats;
use crate::collector::traits::FileSystem;
use crate::config::Platform;
use crate::model::SecurityAssessment;

impl<F: FileSystem + Clone, H: HostStats> DeviceInspector<F, H> {
    /// Root or jailbreak status plus the posture facts readable without
    /// privileges.
    ///
    /// Simulators have no jailbreak artifacts of their own, but the host
    /// filesystem they run on does; the check is skipped there.
    pub fn security_info(&self) -> SecurityAssessment {
        let compromised = || is_compromised(&self.fs, &self.config.compromise_paths);

        match self.platform() {
            Platform::Android => {
                let props = self.properties();
                let usb_config = props
                    .get("persist.sys.usb.config")
                    .or_else(|| props.get("sys.usb.config"));

                SecurityAssessment {
                    is_rooted: Some(compromised()),
                    is_encrypted: props.get("ro.crypto.state").and_then(|state| {
                        match state.as_str() {
                            "encrypted" => Some(true),
                            "unencrypted" => Some(false),
                            _ => None,
                        }
                    }),
                    // USB debugging lives in developer options; its absence proves nothing.
                    is_developer_mode_enabled: usb_config
                        .filter(|config| config.split(',').any(|f| f == "adb"))
                        .map(|_| true),
                    ..Default::default()
                }
            }
            Platform::Ios => SecurityAssessment {
                is_jailbroken: Some(!self.host.is_simulator_build() && compromised()),
                ..Default::default()
            },
        }
    }
}
