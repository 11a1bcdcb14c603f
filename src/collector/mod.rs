//! Device data collectors.
//!
//! This module provides the two sources every record is assembled from:
//! pseudo-files read through the `FileSystem` trait, and native queries
//! behind the `HostStats` trait. Both have mock implementations so that
//! every platform can be tested on any machine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DeviceInspector                        │
//! │  ┌─────────────────────┐   ┌─────────────────────────────┐  │
//! │  │  SystemCollector    │   │     HostStats               │  │
//! │  │  - /proc/meminfo    │   │  - sysinfo / host_stats64   │  │
//! │  │  - /proc/cpuinfo    │   │  - sysctl / system props    │  │
//! │  │  - build.prop, sysfs│   │  - statvfs / getifaddrs     │  │
//! │  └──────────┬──────────┘   └──────────────┬──────────────┘  │
//! │      ┌──────▼──────┐              ┌───────▼──────┐          │
//! │      │  FileSystem │ (trait)      │  NativeHost  │          │
//! │      └──────┬──────┘              │  MockHost    │          │
//! └─────────────┼─────────────────────┴──────────────┴──────────┘
//!        ┌──────┴──────┐
//!   ┌────▼────┐  ┌─────▼─────┐
//!   │ RealFs  │  │  MockFs   │
//!   └─────────┘  └───────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use devprobe::collector::{MockFs, SystemCollector};
//!
//! let collector = SystemCollector::new(MockFs::android_handset(), "/proc");
//! let cpu = collector.collect_cpuinfo().unwrap();
//! assert_eq!(cpu.cores, 8);
//! ```

pub mod host;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use host::{HostStats, NativeHost};
pub use mock::{MockFs, MockHost};
pub use procfs::SystemCollector;
pub use traits::{FileSystem, RealFs};
