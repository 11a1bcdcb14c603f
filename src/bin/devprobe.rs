//! devprobe - one-shot device introspection.
//!
//! Runs a single named operation against the local device and prints the
//! record as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use devprobe::collector::{NativeHost, RealFs};
use devprobe::{DeviceInspector, InspectorConfig, Operation, Outcome, Platform};

/// Exit status for an operation the platform does not implement.
const EXIT_NOT_IMPLEMENTED: u8 = 2;

/// One-shot device introspection.
#[derive(Parser)]
#[command(name = "devprobe", about = "One-shot device introspection", version)]
struct Args {
    /// Operation to run (e.g. getBatteryInfo). See --list.
    #[arg(required_unless_present = "list")]
    operation: Option<String>,

    /// List the operations supported on the selected platform.
    #[arg(long)]
    list: bool,

    /// Platform to inspect as. Defaults to the build target.
    #[arg(long, value_enum)]
    platform: Option<Platform>,

    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, env = "DEVPROBE_PROC_PATH", value_name = "PATH")]
    proc_path: Option<PathBuf>,

    /// Filesystem whose capacity is reported as storage.
    #[arg(long, env = "DEVPROBE_STORAGE_PATH", value_name = "PATH")]
    storage_path: Option<PathBuf>,

    /// Print the record on a single line.
    #[arg(long)]
    compact: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Record wrapper written to stdout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    operation: &'a str,
    platform: Platform,
    collected_at: String,
    result: Value,
}

/// Initializes the tracing subscriber on stderr.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &Args) -> InspectorConfig {
    let mut config = InspectorConfig::for_platform(args.platform.unwrap_or_else(Platform::current));
    if let Some(path) = &args.proc_path {
        config = config.with_proc_path(path);
    }
    if let Some(path) = &args.storage_path {
        config = config.with_storage_path(path);
    }
    config
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = build_config(&args);
    let platform = config.platform;

    if args.list {
        for op in Operation::supported(platform) {
            println!("{op}");
        }
        return ExitCode::SUCCESS;
    }

    let Some(name) = args.operation.as_deref() else {
        return ExitCode::FAILURE;
    };

    info!(
        "devprobe {} running {} as {:?}, proc={}",
        env!("CARGO_PKG_VERSION"),
        name,
        platform,
        config.proc_path.display()
    );

    let inspector = DeviceInspector::with_config(RealFs::new(), NativeHost::new(), config);
    let result = match inspector.dispatch(name) {
        Ok(Outcome::Success(value)) => value,
        Ok(Outcome::NotImplemented) => {
            eprintln!("not implemented: {name}");
            return ExitCode::from(EXIT_NOT_IMPLEMENTED);
        }
        Err(e) => {
            error!("{} failed: {}", name, e);
            return ExitCode::FAILURE;
        }
    };

    let envelope = Envelope {
        operation: name,
        platform,
        collected_at: Utc::now().to_rfc3339(),
        result,
    };
    let encoded = if args.compact {
        serde_json::to_string(&envelope)
    } else {
        serde_json::to_string_pretty(&envelope)
    };

    match encoded {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to encode {}: {}", name, e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_require_operation_or_list() {
        assert!(Args::try_parse_from(["devprobe"]).is_err());
        assert!(Args::try_parse_from(["devprobe", "--list"]).is_ok());

        let args = Args::try_parse_from(["devprobe", "getBatteryInfo", "-vv"]).unwrap();
        assert_eq!(args.operation.as_deref(), Some("getBatteryInfo"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_build_config_overrides() {
        let args = Args::try_parse_from([
            "devprobe",
            "getPerformanceInfo",
            "--platform",
            "android",
            "--proc-path",
            "/tmp/proc",
            "--storage-path",
            "/sdcard",
        ])
        .unwrap();
        let config = build_config(&args);

        assert_eq!(config.platform, Platform::Android);
        assert_eq!(config.proc_path, PathBuf::from("/tmp/proc"));
        assert_eq!(config.storage_path, PathBuf::from("/sdcard"));
    }
}
