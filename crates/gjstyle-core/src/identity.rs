// Rust guideline compliant 2026-10-14

//! Response id generation and validation.
//!
//! Ids have the shape `<hash>-<n>`: 32 lowercase hex characters taken from a
//! SHA-256 digest of the current time and a process-wide counter, followed by
//! a suffix in `1..=100`.

use crate::{Error, Result};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of hex characters kept from the digest.
const HASH_LEN: usize = 32;

/// Upper bound of the numeric suffix (inclusive).
const SUFFIX_MAX: u16 = 100;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Creates a new server supplied response identifier.
///
/// Two calls in the same process never return the same id, even when the
/// clock does not advance between them.
pub fn create_response_id() -> String {
    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000));
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    generate_id(nanos, sequence)
}

/// Derives a response id from a timestamp and a sequence number.
///
/// # Arguments
///
/// * `timestamp_nanos` - Nanoseconds since the Unix epoch
/// * `sequence` - Disambiguating counter value
///
/// # Returns
///
/// A deterministic id for the given inputs.
pub fn generate_id(timestamp_nanos: i64, sequence: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(timestamp_nanos.to_le_bytes());
    hasher.update(sequence.to_le_bytes());
    let hash = hasher.finalize();

    let hex = format!("{:x}", hash);
    let suffix = u16::from_be_bytes([hash[30], hash[31]]) % SUFFIX_MAX + 1;
    format!("{}-{}", &hex[..HASH_LEN], suffix)
}

/// Validates that a string has the response id shape.
///
/// # Errors
///
/// Returns `Error::InvalidId` if the hash part is not 32 lowercase hex
/// characters or the suffix is not a number in `1..=100`.
pub fn validate_response_id(id: &str) -> Result<()> {
    let (hash, suffix) = id
        .rsplit_once('-')
        .ok_or_else(|| Error::InvalidId(format!("'{id}' is missing the '-' separator")))?;

    if hash.len() != HASH_LEN
        || !hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        return Err(Error::InvalidId(format!(
            "'{id}' must start with {HASH_LEN} lowercase hex characters"
        )));
    }

    match suffix.parse::<u16>() {
        Ok(n) if (1..=SUFFIX_MAX).contains(&n) => Ok(()),
        _ => Err(Error::InvalidId(format!(
            "'{id}' must end with a number between 1 and {SUFFIX_MAX}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_valid() {
        let id = create_response_id();
        assert!(!id.is_empty());
        assert!(validate_response_id(&id).is_ok(), "invalid id: {id}");
    }

    #[test]
    fn test_generate_id_is_deterministic() {
        assert_eq!(generate_id(42, 7), generate_id(42, 7));
        assert_ne!(generate_id(42, 7), generate_id(42, 8));
    }

    #[test]
    fn test_consecutive_ids_differ() {
        let ids: std::collections::HashSet<String> =
            (0..1000).map(|_| create_response_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        assert!(validate_response_id("").is_err());
        assert!(validate_response_id("abc").is_err());
        assert!(validate_response_id("abc-5").is_err());

        let hash = "0123456789abcdef0123456789abcdef";
        assert!(validate_response_id(&format!("{hash}-1")).is_ok());
        assert!(validate_response_id(&format!("{hash}-100")).is_ok());
        assert!(validate_response_id(&format!("{hash}-0")).is_err());
        assert!(validate_response_id(&format!("{hash}-101")).is_err());
        assert!(validate_response_id(&format!("{}-5", hash.to_uppercase())).is_err());
    }
}
