// Rust guideline compliant 2026-10-14

//! Implementation of the `gjs init-config` command.

use anyhow::{bail, Context, Result};
use gjstyle_core::Config;
use std::io::Write;
use std::path::Path;

/// Writes the effective configuration to a TOML file and reports the
/// destination on `out`.
///
/// # Errors
///
/// Returns an error if the file already exists (unless `force` is set) or
/// cannot be written.
pub fn execute(path: &Path, config: &Config, force: bool, out: &mut dyn Write) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists. Use --force to overwrite.", path.display());
    }
    config
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writeln!(out, "Wrote configuration to {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gjstyle.toml");
        std::fs::write(&path, "pretty = true").unwrap();

        let mut out = Vec::new();
        assert!(execute(&path, &Config::default(), false, &mut out).is_err());
        assert!(out.is_empty());
        assert!(execute(&path, &Config::default(), true, &mut out).is_ok());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("default_api_version"));
    }

    #[test]
    fn test_reports_written_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gjstyle.toml");
        let config = Config {
            default_api_version: "2.0".to_string(),
            ..Config::default()
        };

        let mut out = Vec::new();
        execute(&path, &config, false, &mut out).unwrap();
        let message = String::from_utf8(out).unwrap();
        assert_eq!(message.trim(), format!("Wrote configuration to {}", path.display()));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("default_api_version = \"2.0\""));
    }
}
