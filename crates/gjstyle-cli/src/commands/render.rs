// Rust guideline compliant 2026-10-14

//! Implementation of the `gjs render` command.
//!
//! Reads an envelope description as JSON, renders it into the Google JSON
//! Style shape and writes the result.

use anyhow::{Context, Result};
use gjstyle_core::{normalize, Config, Document, ResponseEnvelope};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Arguments of the render command.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Input file; stdin when `None` or `-`.
    pub input: Option<PathBuf>,
    /// Print the normalized document without optimization.
    pub raw: bool,
    /// Pretty print even if the config says otherwise.
    pub pretty: bool,
    /// Keep `data` next to `error` for this run.
    pub keep_data: bool,
}

/// Renders an envelope read from a file or stdin.
///
/// # Arguments
///
/// * `args` - Command arguments
/// * `config` - Loaded configuration
/// * `out` - Destination of the rendered JSON
///
/// # Errors
///
/// Returns an error if:
/// - The input cannot be read
/// - The input is not a valid envelope description
/// - Writing the output fails
pub fn execute(args: &RenderArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let text = read_input(args)?;
    let envelope = parse_envelope(&text, config)?;

    let document = if args.raw {
        normalize(&envelope)
    } else {
        let mut options = config.optimize_options();
        if args.keep_data {
            options.enforce_error_precedence = false;
        }
        envelope.render_with(&options)
    };

    write_document(&document, args.pretty || config.pretty, out)
}

/// Parses an envelope description, applying the configured api version
/// when the input does not name one.
///
/// # Errors
///
/// Returns an error if the text is not JSON or a field has the wrong type.
pub fn parse_envelope(text: &str, config: &Config) -> Result<ResponseEnvelope> {
    let value: serde_json::Value =
        serde_json::from_str(text).context("Input is not valid JSON")?;
    let names_version = value
        .as_object()
        .is_some_and(|fields| fields.contains_key("api_version"));

    let mut envelope: ResponseEnvelope =
        serde_json::from_value(value).context("Input is not a valid response envelope")?;
    if !names_version {
        envelope.api_version = Some(config.default_api_version.clone());
    }
    debug!(id = ?envelope.id, "parsed envelope");
    Ok(envelope)
}

fn read_input(args: &RenderArgs) -> Result<String> {
    match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            info!(path = %path.display(), "reading envelope");
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn write_document(document: &Document, pretty: bool, out: &mut dyn Write) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    writeln!(out, "{}", text)?;
    Ok(())
}
