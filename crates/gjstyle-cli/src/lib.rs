// Rust guideline compliant 2026-10-14

//! gjstyle CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;

pub use logging::init_tracing;
