//! Security posture record.
//!
//! Classification is advisory. Nothing here blocks or enforces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAssessment {
    pub is_device_secure: Option<bool>,
    /// Android only; `None` on iOS.
    pub is_rooted: Option<bool>,
    /// iOS only; `None` on Android.
    pub is_jailbroken: Option<bool>,
    pub biometric_types: Option<Vec<String>>,
    pub lock_screen_type: Option<String>,
    pub is_encrypted: Option<bool>,
    pub is_developer_mode_enabled: Option<bool>,
}
