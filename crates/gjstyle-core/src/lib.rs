// Rust guideline compliant 2026-10-14

//! gjstyle Core Library
//!
//! This crate renders API responses into the Google JSON Style envelope:
//! - Data model (ResponseEnvelope and its data, error and params sections)
//! - Response id generation
//! - Normalization of the typed model into a generic JSON document
//! - Optimization rules (null pruning, pagination defaults, precedence)
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod normalize;
pub mod optimize;

pub use config::Config;
pub use error::{Error, Result};
pub use identity::create_response_id;
pub use models::{DataSection, ErrorDetail, ErrorSection, ParamsSection, ResponseEnvelope};
pub use normalize::{normalize, Normalize};
pub use optimize::{optimize, optimize_with, OptimizeOptions};

/// A JSON object whose keys keep their insertion order.
pub type Document = serde_json::Map<String, serde_json::Value>;
