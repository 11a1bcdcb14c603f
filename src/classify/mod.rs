//! Heuristic device classification.
//!
//! Both classifiers are pure over their inputs and advisory: they report,
//! they never block.

pub mod emulator;
pub mod integrity;

pub use emulator::{BuildIdentity, EMULATOR_SIGNALS, Signal, classify_emulator};
pub use integrity::{JAILBREAK_PATHS, ROOT_PATHS, is_compromised};
