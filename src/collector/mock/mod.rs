//! Mock implementations for testing.
//!
//! This module provides `MockFs`, `MockHost` and pre-built device scenarios
//! for testing collectors without a real handset.

mod filesystem;
mod host;
mod scenarios;

pub use filesystem::MockFs;
pub use host::MockHost;
