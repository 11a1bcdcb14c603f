//! devprobe - one-shot device introspection for mobile platforms.
//!
//! This library provides:
//! - `collector` - pseudo-file parsers, host statistics, filesystem abstraction
//! - `classify` - emulator and rooted/jailbroken device heuristics
//! - `model` - serializable record groups
//! - `snapshot` - assembles records from collectors and classifiers
//! - `dispatch` - maps named operations to record groups

pub mod classify;
pub mod collector;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod snapshot;

pub use config::{InspectorConfig, Platform};
pub use dispatch::{Operation, Outcome};
pub use snapshot::DeviceInspector;
