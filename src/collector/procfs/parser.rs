//! Parsers for kernel pseudo-files and Android property files.
//!
//! These are pure functions over file content, designed to be easily
//! testable with string inputs. Malformed lines are skipped, never fatal.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::trace;

use crate::error::ParseError;

const KIB: u64 = 1024;

/// Parses the first line of `/proc/meminfo` into total memory in bytes.
///
/// The line looks like `MemTotal:  2048000 kB`; the second whitespace
/// separated token is the value in kibibytes.
pub fn parse_meminfo_total(first_line: &str) -> Result<u64, ParseError> {
    let kib: u64 = first_line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ParseError::new("missing value in meminfo line"))?
        .parse()
        .map_err(|_| ParseError::new("invalid kibibyte value in meminfo line"))?;
    kib.checked_mul(KIB)
        .ok_or_else(|| ParseError::new("meminfo value overflows u64 bytes"))
}

/// Parses a named `/proc/meminfo` field (e.g. `MemAvailable`) into bytes.
pub fn parse_meminfo_field(content: &str, key: &str) -> Result<u64, ParseError> {
    let line = content
        .lines()
        .find(|line| {
            line.split_once(':')
                .is_some_and(|(name, _)| name.trim() == key)
        })
        .ok_or_else(|| ParseError::new(format!("missing {} in meminfo", key)))?;
    parse_meminfo_total(line)
}

/// Parsed data from `/proc/cpuinfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuInfo {
    /// Number of `processor` lines seen.
    pub cores: u32,
    pub model_name: Option<String>,
    pub frequency: Option<String>,
    pub hardware: Option<String>,
}

/// Parses `/proc/cpuinfo` content.
///
/// Each line must split into exactly one `key: value` pair on `:`; other
/// lines are skipped. Global fields are repeated per core, so the last
/// occurrence wins.
pub fn parse_cpuinfo(content: &str) -> CpuInfo {
    let mut info = CpuInfo::default();

    for line in content.lines() {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            if !line.trim().is_empty() {
                trace!(line, "skipping malformed cpuinfo line");
            }
            continue;
        }

        let key = parts[0].trim();
        let value = parts[1].trim();
        match key {
            "processor" => info.cores += 1,
            "model name" => info.model_name = Some(value.to_string()),
            "cpu MHz" => info.frequency = Some(value.to_string()),
            "Hardware" => info.hardware = Some(value.to_string()),
            _ => {}
        }
    }

    info
}

/// Parses a `build.prop` style property file.
///
/// Format is `key=value`, one per line, `#` starts a comment. Read-only
/// properties keep their first assignment.
pub fn parse_build_prop(content: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            trace!(line, "skipping build.prop line without '='");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        props
            .entry(key.to_string())
            .or_insert_with(|| value.trim().to_string());
    }

    props
}

/// Splits a comma separated property value (ABI lists, dual-SIM operators).
pub fn split_prop_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts feature names from a permissions XML file.
///
/// Only `<feature name="..."/>` elements count; `<unavailable-feature>` and
/// other elements are ignored.
pub fn parse_feature_xml(content: &str) -> Vec<String> {
    const OPEN: &str = "<feature";
    let mut names = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find(OPEN) {
        let tag = &rest[start..];
        let end = tag.find('>').unwrap_or(tag.len());
        let body = &tag[..end];

        if body[OPEN.len()..].starts_with(char::is_whitespace)
            && let Some(name) = xml_attribute(body, "name")
        {
            names.push(name.to_string());
        }
        rest = &tag[end..];
    }

    names
}

fn xml_attribute<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", attr);
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

/// Parses the sysfs battery `capacity` attribute (percent) into a fraction.
pub fn parse_battery_capacity(content: &str) -> Result<f64, ParseError> {
    let percent: u32 = content
        .trim()
        .parse()
        .map_err(|_| ParseError::new("invalid battery capacity"))?;
    if percent > 100 {
        return Err(ParseError::new(format!(
            "battery capacity out of range: {}",
            percent
        )));
    }
    Ok(percent as f64 / 100.0)
}

/// Parses the sysfs battery `temp` attribute (tenths of a degree Celsius).
pub fn parse_battery_temperature(content: &str) -> Result<f64, ParseError> {
    let decidegrees: i64 = content
        .trim()
        .parse()
        .map_err(|_| ParseError::new("invalid battery temperature"))?;
    Ok(decidegrees as f64 / 10.0)
}

/// Computes battery health as `charge_full / charge_full_design`.
pub fn parse_battery_health(full: &str, design: &str) -> Result<f64, ParseError> {
    let full: u64 = full
        .trim()
        .parse()
        .map_err(|_| ParseError::new("invalid charge_full"))?;
    let design: u64 = design
        .trim()
        .parse()
        .map_err(|_| ParseError::new("invalid charge_full_design"))?;
    if design == 0 {
        return Err(ParseError::new("charge_full_design is zero"));
    }
    Ok((full as f64 / design as f64).min(1.0))
}

/// Parses a thermal zone `temp` attribute (millidegrees Celsius).
pub fn parse_thermal_zone(content: &str) -> Result<f64, ParseError> {
    let millidegrees: i64 = content
        .trim()
        .parse()
        .map_err(|_| ParseError::new("invalid thermal zone temperature"))?;
    Ok(millidegrees as f64 / 1000.0)
}

/// Counts process directories (all-digit names) in a `/proc` listing.
pub fn count_process_dirs(entries: &[PathBuf]) -> u64 {
    entries
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .filter(|name| !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_meminfo_total() {
        assert_eq!(
            parse_meminfo_total("MemTotal:        2048000 kB").unwrap(),
            2_097_152_000
        );
    }

    #[test]
    fn test_parse_meminfo_total_malformed() {
        assert!(parse_meminfo_total("").is_err());
        assert!(parse_meminfo_total("MemTotal:").is_err());
        assert!(parse_meminfo_total("MemTotal: lots kB").is_err());
        assert!(parse_meminfo_total("MemTotal: 18446744073709551615 kB").is_err());
    }

    #[test]
    fn test_parse_meminfo_field() {
        let content = "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
";
        assert_eq!(
            parse_meminfo_field(content, "MemAvailable").unwrap(),
            12_000_000 * 1024
        );
        assert!(parse_meminfo_field(content, "SwapTotal").is_err());
    }

    #[test]
    fn test_parse_cpuinfo_arm() {
        let content = "\
processor\t: 0
BogoMIPS\t: 38.40
Features\t: fp asimd evtstrm aes pmull sha1 sha2 crc32
CPU implementer\t: 0x41

processor\t: 1
BogoMIPS\t: 38.40

Hardware\t: Qualcomm Technologies, Inc SM8150
";
        let info = parse_cpuinfo(content);
        assert_eq!(info.cores, 2);
        assert_eq!(
            info.hardware.as_deref(),
            Some("Qualcomm Technologies, Inc SM8150")
        );
        assert_eq!(info.model_name, None);
        assert_eq!(info.frequency, None);
    }

    #[test]
    fn test_parse_cpuinfo_two_cores_model_name() {
        let content = "processor : 0\nprocessor : 1\nmodel name : Cortex-X\n";
        let info = parse_cpuinfo(content);
        assert_eq!(info.cores, 2);
        assert_eq!(info.model_name.as_deref(), Some("Cortex-X"));
    }

    #[test]
    fn test_parse_cpuinfo_last_value_wins() {
        let content = "\
processor\t: 0
model name\t: Cortex-A55
cpu MHz\t\t: 1800.000
processor\t: 1
model name\t: Cortex-A76
cpu MHz\t\t: 2400.000
";
        let info = parse_cpuinfo(content);
        assert_eq!(info.cores, 2);
        assert_eq!(info.model_name.as_deref(), Some("Cortex-A76"));
        assert_eq!(info.frequency.as_deref(), Some("2400.000"));
    }

    #[test]
    fn test_parse_cpuinfo_skips_malformed_lines() {
        let content = "\
processor : 0
model name : Cortex-X
no colon here
address sizes : 39 bits : 48 bits
processor
Hardware : Tensor
";
        let info = parse_cpuinfo(content);
        assert_eq!(info.cores, 1);
        assert_eq!(info.model_name.as_deref(), Some("Cortex-X"));
        assert_eq!(info.hardware.as_deref(), Some("Tensor"));
    }

    #[test]
    fn test_parse_build_prop() {
        let content = "\
# begin build properties
ro.build.fingerprint=google/sdk_gphone64_x86_64/emu64xa:14/UE1A/1:user/release-keys
ro.product.model = sdk_gphone64_x86_64
not a property
=orphan value
ro.product.model=overridden
ro.product.cpu.abilist=x86_64,arm64-v8a
";
        let props = parse_build_prop(content);
        assert_eq!(
            props.get("ro.build.fingerprint").map(String::as_str),
            Some("google/sdk_gphone64_x86_64/emu64xa:14/UE1A/1:user/release-keys")
        );
        assert_eq!(
            props.get("ro.product.model").map(String::as_str),
            Some("sdk_gphone64_x86_64")
        );
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn test_split_prop_list() {
        assert_eq!(
            split_prop_list("arm64-v8a, armeabi-v7a,,armeabi"),
            vec!["arm64-v8a", "armeabi-v7a", "armeabi"]
        );
        assert!(split_prop_list("").is_empty());
    }

    #[test]
    fn test_parse_feature_xml() {
        let content = r#"<?xml version="1.0" encoding="utf-8"?>
<permissions>
    <feature name="android.hardware.camera" />
    <feature name="android.hardware.wifi"/>
    <unavailable-feature name="android.hardware.nfc" />
    <feature-group name="not.a.feature"/>
    <feature
        name="android.software.webview" version="2" />
    <library name="com.android.location.provider" />
</permissions>
"#;
        assert_eq!(
            parse_feature_xml(content),
            vec![
                "android.hardware.camera",
                "android.hardware.wifi",
                "android.software.webview"
            ]
        );
    }

    #[test]
    fn test_parse_battery_attributes() {
        assert!((parse_battery_capacity("87\n").unwrap() - 0.87).abs() < 1e-9);
        assert!(parse_battery_capacity("140").is_err());
        assert!((parse_battery_temperature("312\n").unwrap() - 31.2).abs() < 1e-9);
        assert!((parse_battery_health("3800000", "4000000").unwrap() - 0.95).abs() < 1e-9);
        assert!(parse_battery_health("3800000", "0").is_err());
    }

    #[test]
    fn test_parse_thermal_zone() {
        assert!((parse_thermal_zone("36500\n").unwrap() - 36.5).abs() < 1e-9);
        assert!(parse_thermal_zone("hot").is_err());
    }

    #[test]
    fn test_count_process_dirs() {
        let entries: Vec<PathBuf> = ["/proc/1", "/proc/42", "/proc/self", "/proc/meminfo"]
            .iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(count_process_dirs(&entries), 2);
    }

    fn cpuinfo_line() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("processor\t: 0".to_string()),
            "[a-zA-Z ]{1,12}".prop_map(|k| format!("{} : value", k)),
            "[a-z]{1,10}",
            Just("a : b : c".to_string()),
            Just(String::new()),
        ]
    }

    proptest! {
        #[test]
        fn prop_meminfo_total_is_kib_times_1024(kib in 0u64..(u64::MAX / 1024)) {
            let line = format!("MemTotal:    {} kB", kib);
            prop_assert_eq!(parse_meminfo_total(&line).unwrap(), kib * 1024);
        }

        #[test]
        fn prop_core_count_matches_processor_lines(lines in prop::collection::vec(cpuinfo_line(), 0..64)) {
            let expected = lines
                .iter()
                .filter(|l| {
                    let parts: Vec<&str> = l.split(':').collect();
                    parts.len() == 2 && parts[0].trim() == "processor"
                })
                .count() as u32;
            let info = parse_cpuinfo(&lines.join("\n"));
            prop_assert_eq!(info.cores, expected);
        }

        #[test]
        fn prop_malformed_line_does_not_disturb_neighbours(noise in "[a-z :]{0,20}") {
            let content = format!("model name : Cortex-X\n{}\nHardware : Tensor\n", noise);
            let info = parse_cpuinfo(&content);
            prop_assert_eq!(info.hardware.as_deref(), Some("Tensor"));
            let parts: Vec<&str> = noise.split(':').collect();
            if parts.len() != 2 || parts[0].trim() != "model name" {
                prop_assert_eq!(info.model_name.as_deref(), Some("Cortex-X"));
            }
        }
    }
}
