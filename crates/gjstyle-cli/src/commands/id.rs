// Rust guideline compliant 2026-10-14

//! Implementation of the `gjs id` command.

use anyhow::{bail, Result};
use gjstyle_core::create_response_id;
use std::io::Write;

/// Writes `count` fresh response ids, one per line.
///
/// # Errors
///
/// Returns an error if `count` is zero or writing fails.
pub fn execute(count: usize, out: &mut dyn Write) -> Result<()> {
    if count == 0 {
        bail!("Count must be at least 1");
    }
    for _ in 0..count {
        writeln!(out, "{}", create_response_id())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gjstyle_core::identity::validate_response_id;

    #[test]
    fn test_writes_requested_number_of_ids() {
        let mut out = Vec::new();
        execute(3, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let ids: Vec<&str> = text.lines().collect();
        assert_eq!(ids.len(), 3);
        for id in &ids {
            assert!(validate_response_id(id).is_ok());
        }
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let mut out = Vec::new();
        assert!(execute(0, &mut out).is_err());
    }
}
