// Rust guideline compliant 2026-10-14

//! Pruning and defaulting rules applied to a normalized document.
//!
//! Rules run in this order, each one reading the output of the previous:
//! 1. Null fields are pruned from `error` and from each of its details;
//!    details left empty are removed.
//! 2. `data` receives pagination defaults when it has items, then is pruned.
//! 3. Null and empty fields are pruned from `params`.
//! 4. Null top-level keys and empty sections are removed.
//! 5. `data` is dropped when `error` survives alongside it.

use crate::{Document, Error, Result};
use serde_json::{json, Value};
use tracing::{debug, trace};

/// Top-level keys subject to collapsing, in output order.
pub const TOP_LEVEL_FIELDS: [&str; 7] = [
    "api_version",
    "context",
    "id",
    "method",
    "params",
    "data",
    "error",
];

/// Top-level keys holding sections, removed when empty.
pub const CONTAINER_FIELDS: [&str; 3] = ["error", "data", "params"];

/// Options controlling the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeOptions {
    /// Drop `data` when a non-empty `error` is also present.
    pub enforce_error_precedence: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            enforce_error_precedence: true,
        }
    }
}

/// Optimizes a document with the default options.
///
/// # Errors
///
/// Returns `Error::MalformedDocument` if a section is not a mapping or if
/// `error.errors` / `data.items` is not a sequence of mappings.
pub fn optimize(doc: Document) -> Result<Document> {
    optimize_with(doc, &OptimizeOptions::default())
}

/// Optimizes a document with explicit options.
///
/// # Arguments
///
/// * `doc` - Normalized document, or any document with the same shape
/// * `options` - Optimizer switches
///
/// # Returns
///
/// The pruned and defaulted document.
///
/// # Errors
///
/// Returns `Error::MalformedDocument` if the document does not have the
/// envelope shape. No rule runs on a malformed document.
pub fn optimize_with(doc: Document, options: &OptimizeOptions) -> Result<Document> {
    check_shape(&doc)?;
    Ok(apply_rules(doc, options))
}

/// Runs every rule on a document already known to be well formed.
pub(crate) fn apply_rules(mut doc: Document, options: &OptimizeOptions) -> Document {
    prune_error(&mut doc);
    prune_data(&mut doc);
    prune_params(&mut doc);
    collapse_top_level(&mut doc);
    if options.enforce_error_precedence {
        enforce_error_precedence(&mut doc);
    }
    doc
}

/// Null, an empty mapping and an empty sequence count as empty.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(entries) => entries.is_empty(),
        _ => false,
    }
}

fn non_empty_section<'a>(doc: &'a mut Document, key: &str) -> Option<&'a mut Document> {
    doc.get_mut(key)
        .filter(|value| !is_empty(value))
        .and_then(Value::as_object_mut)
}

fn drop_nulls(section: &mut Document) {
    section.retain(|_, value| !value.is_null());
}

fn drop_empty_sequence(section: &mut Document, key: &str) {
    let empty = section
        .get(key)
        .and_then(Value::as_array)
        .is_some_and(Vec::is_empty);
    if empty {
        section.retain(|k, _| k != key);
    }
}

fn default_field(section: &mut Document, key: &str, value: Value) {
    if section.get(key).map_or(true, Value::is_null) {
        section.insert(key.to_string(), value);
    }
}

fn prune_error(doc: &mut Document) {
    let Some(error) = non_empty_section(doc, "error") else {
        return;
    };

    if let Some(Value::Array(errors)) = error.get_mut("errors") {
        for detail in errors.iter_mut().filter_map(Value::as_object_mut) {
            drop_nulls(detail);
        }
        errors.retain(|detail| !is_empty(detail));
    }

    drop_nulls(error);
    drop_empty_sequence(error, "errors");
    trace!(fields = error.len(), "pruned error section");
}

fn prune_data(doc: &mut Document) {
    let Some(data) = non_empty_section(doc, "data") else {
        return;
    };

    let item_count = data
        .get("items")
        .and_then(Value::as_array)
        .map(Vec::len)
        .filter(|count| *count > 0);

    if let Some(count) = item_count {
        default_field(data, "total_pages", json!(1));
        default_field(data, "total_items", json!(count));
        let total_items = data.get("total_items").cloned().unwrap_or(Value::Null);
        default_field(data, "current_item_count", total_items);
        default_field(data, "page_index", json!(1));
    }

    drop_nulls(data);
    drop_empty_sequence(data, "items");
    trace!(fields = data.len(), "pruned data section");
}

fn prune_params(doc: &mut Document) {
    if let Some(params) = non_empty_section(doc, "params") {
        params.retain(|_, value| !is_empty(value));
    }
}

fn collapse_top_level(doc: &mut Document) {
    for key in TOP_LEVEL_FIELDS {
        let remove = match doc.get(key) {
            None => false,
            Some(Value::Null) => true,
            Some(value) => CONTAINER_FIELDS.contains(&key) && is_empty(value),
        };
        if remove {
            doc.retain(|k, _| k != key);
        }
    }
}

fn enforce_error_precedence(doc: &mut Document) {
    if doc.contains_key("error") && doc.contains_key("data") {
        debug!("error section present, dropping data section");
        doc.retain(|k, _| k != "data");
    }
}

fn check_shape(doc: &Document) -> Result<()> {
    for key in CONTAINER_FIELDS {
        match doc.get(key) {
            None | Some(Value::Null) | Some(Value::Object(_)) => {}
            Some(other) => {
                return Err(Error::MalformedDocument(format!(
                    "{key} must be a mapping, got {}",
                    kind_of(other)
                )));
            }
        }
    }

    check_sequence(doc, "error", "errors")?;
    check_sequence(doc, "data", "items")
}

fn check_sequence(doc: &Document, section: &str, key: &str) -> Result<()> {
    let Some(value) = doc.get(section).and_then(|s| s.get(key)) else {
        return Ok(());
    };

    match value {
        Value::Null => Ok(()),
        Value::Array(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                if !entry.is_object() {
                    return Err(Error::MalformedDocument(format!(
                        "{section}.{key}[{index}] must be a mapping, got {}",
                        kind_of(entry)
                    )));
                }
            }
            Ok(())
        }
        other => Err(Error::MalformedDocument(format!(
            "{section}.{key} must be a sequence, got {}",
            kind_of(other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
