//! Collectors for kernel pseudo-files.
//!
//! This module provides parsers and a collector for reading memory,
//! processor, battery and thermal facts from `/proc` and sysfs, plus the
//! Android build property files.

pub mod parser;
pub mod system;

pub use parser::CpuInfo;
pub use system::SystemCollector;
