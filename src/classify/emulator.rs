//! Emulator and simulator detection.
//!
//! Detection is a plain union of independent string signals over the build
//! identity. No signal outweighs another, and new signals are added by
//! appending to `EMULATOR_SIGNALS`.

use tracing::debug;

/// Build identity fields consulted by the emulator signals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildIdentity {
    pub fingerprint: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub brand: Option<String>,
    pub device: Option<String>,
    pub product: Option<String>,
}

/// One independent boolean check.
#[derive(Debug, Clone, Copy)]
pub struct Signal {
    pub name: &'static str,
    pub check: fn(&BuildIdentity) -> bool,
}

/// Known emulator indicators, checked in order.
pub const EMULATOR_SIGNALS: &[Signal] = &[
    Signal {
        name: "fingerprint-generic",
        check: fingerprint_generic,
    },
    Signal {
        name: "fingerprint-unknown",
        check: fingerprint_unknown,
    },
    Signal {
        name: "model-google-sdk",
        check: model_google_sdk,
    },
    Signal {
        name: "model-emulator",
        check: model_emulator,
    },
    Signal {
        name: "model-sdk-x86",
        check: model_sdk_x86,
    },
    Signal {
        name: "manufacturer-genymotion",
        check: manufacturer_genymotion,
    },
    Signal {
        name: "brand-device-generic",
        check: brand_and_device_generic,
    },
    Signal {
        name: "product-google-sdk",
        check: product_google_sdk,
    },
];

fn starts_with(field: &Option<String>, prefix: &str) -> bool {
    field.as_deref().is_some_and(|v| v.starts_with(prefix))
}

fn contains(field: &Option<String>, needle: &str) -> bool {
    field.as_deref().is_some_and(|v| v.contains(needle))
}

fn fingerprint_generic(id: &BuildIdentity) -> bool {
    starts_with(&id.fingerprint, "generic")
}

fn fingerprint_unknown(id: &BuildIdentity) -> bool {
    starts_with(&id.fingerprint, "unknown")
}

fn model_google_sdk(id: &BuildIdentity) -> bool {
    contains(&id.model, "google_sdk")
}

fn model_emulator(id: &BuildIdentity) -> bool {
    contains(&id.model, "Emulator")
}

fn model_sdk_x86(id: &BuildIdentity) -> bool {
    contains(&id.model, "Android SDK built for x86")
}

fn manufacturer_genymotion(id: &BuildIdentity) -> bool {
    contains(&id.manufacturer, "Genymotion")
}

fn brand_and_device_generic(id: &BuildIdentity) -> bool {
    starts_with(&id.brand, "generic") && starts_with(&id.device, "generic")
}

fn product_google_sdk(id: &BuildIdentity) -> bool {
    id.product.as_deref() == Some("google_sdk")
}

/// Returns the first signal that fires for `identity`.
pub fn matching_signal(identity: &BuildIdentity) -> Option<&'static Signal> {
    EMULATOR_SIGNALS.iter().find(|signal| (signal.check)(identity))
}

/// Classifies a device as emulated.
///
/// A `Some` simulator flag comes from the build target and is authoritative:
/// the signals are not evaluated. With `None` the result is the OR of all
/// signals. Absent identity fields never fire.
pub fn classify_emulator(identity: &BuildIdentity, simulator_flag: Option<bool>) -> bool {
    if let Some(flag) = simulator_flag {
        return flag;
    }
    match matching_signal(identity) {
        Some(signal) => {
            debug!(signal = signal.name, "emulator signal matched");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physical() -> BuildIdentity {
        BuildIdentity {
            fingerprint: Some(
                "google/oriole/oriole:14/UQ1A.240205.004/11269751:user/release-keys".into(),
            ),
            model: Some("Pixel 6".into()),
            manufacturer: Some("Google".into()),
            brand: Some("google".into()),
            device: Some("oriole".into()),
            product: Some("oriole".into()),
        }
    }

    #[test]
    fn test_physical_device_matches_no_signal() {
        assert!(matching_signal(&physical()).is_none());
        assert!(!classify_emulator(&physical(), None));
    }

    #[test]
    fn test_generic_fingerprint() {
        let id = BuildIdentity {
            fingerprint: Some("generic/sdk".into()),
            ..Default::default()
        };
        assert!(classify_emulator(&id, None));
        assert_eq!(matching_signal(&id).unwrap().name, "fingerprint-generic");
    }

    #[test]
    fn test_each_signal_alone_classifies_as_emulator() {
        let cases: Vec<(&str, BuildIdentity)> = vec![
            ("fingerprint-unknown", BuildIdentity {
                fingerprint: Some("unknown/x".into()),
                ..physical()
            }),
            ("model-google-sdk", BuildIdentity {
                model: Some("google_sdk".into()),
                ..physical()
            }),
            ("model-emulator", BuildIdentity {
                model: Some("Pixel Emulator".into()),
                ..physical()
            }),
            ("model-sdk-x86", BuildIdentity {
                model: Some("Android SDK built for x86_64".into()),
                ..physical()
            }),
            ("manufacturer-genymotion", BuildIdentity {
                manufacturer: Some("Genymotion".into()),
                ..physical()
            }),
            ("brand-device-generic", BuildIdentity {
                brand: Some("generic_x86".into()),
                device: Some("generic_x86".into()),
                ..physical()
            }),
            ("product-google-sdk", BuildIdentity {
                product: Some("google_sdk".into()),
                ..physical()
            }),
        ];

        for (expected, id) in cases {
            assert!(classify_emulator(&id, None), "{expected} should fire");
            assert_eq!(matching_signal(&id).unwrap().name, expected);
        }
    }

    #[test]
    fn test_generic_brand_alone_is_not_enough() {
        let id = BuildIdentity {
            brand: Some("generic".into()),
            ..physical()
        };
        assert!(!classify_emulator(&id, None));
    }

    #[test]
    fn test_product_must_match_exactly() {
        let id = BuildIdentity {
            product: Some("google_sdk_phone".into()),
            ..physical()
        };
        assert!(!classify_emulator(&id, None));
    }

    #[test]
    fn test_absent_fields_never_fire() {
        assert!(!classify_emulator(&BuildIdentity::default(), None));
    }

    #[test]
    fn test_simulator_flag_is_authoritative() {
        let emulator = BuildIdentity {
            fingerprint: Some("generic/sdk".into()),
            ..Default::default()
        };
        assert!(!classify_emulator(&emulator, Some(false)));
        assert!(classify_emulator(&physical(), Some(true)));
    }
}
