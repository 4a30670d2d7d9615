// Rust guideline compliant 2026-10-14

//! Command implementations for the gjstyle CLI.

pub mod config;
pub mod id;
pub mod render;
