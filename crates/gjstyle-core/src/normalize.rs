// Rust guideline compliant 2026-10-14

//! Conversion of the typed envelope into a generic JSON document.
//!
//! Normalization is lossless: every declared field appears in the output,
//! unset fields as `null` and empty sequences as `[]`. No pruning happens
//! here; see [`crate::optimize`].

use crate::models::{DataSection, ErrorDetail, ErrorSection, ParamsSection, ResponseEnvelope};
use crate::Document;
use serde_json::{json, Value};

/// Types that convert into a normalized JSON document.
pub trait Normalize {
    /// Returns the document with one key per declared field.
    fn to_document(&self) -> Document;
}

/// Normalizes a whole envelope.
///
/// # Arguments
///
/// * `envelope` - Envelope to convert
///
/// # Returns
///
/// The raw document, keys in declaration order.
pub fn normalize(envelope: &ResponseEnvelope) -> Document {
    envelope.to_document()
}

fn document<const N: usize>(fields: [(&str, Value); N]) -> Document {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn section<T: Normalize>(section: Option<&T>) -> Value {
    section.map_or(Value::Null, |s| Value::Object(s.to_document()))
}

impl Normalize for ResponseEnvelope {
    fn to_document(&self) -> Document {
        document([
            ("api_version", json!(self.api_version)),
            ("context", json!(self.context)),
            ("id", json!(self.id)),
            ("method", json!(self.method)),
            ("params", section(self.params.as_ref())),
            ("data", section(self.data.as_ref())),
            ("error", section(self.error.as_ref())),
        ])
    }
}

impl Normalize for DataSection {
    fn to_document(&self) -> Document {
        document([
            ("code", json!(self.code)),
            ("message", json!(self.message)),
            ("kind", json!(self.kind)),
            ("fields", json!(self.fields)),
            ("etag", json!(self.etag)),
            ("id", json!(self.id)),
            ("lang", json!(self.lang)),
            ("data", json!(self.data)),
            ("deleted", json!(self.deleted)),
            ("current_item_count", json!(self.current_item_count)),
            ("items_per_page", json!(self.items_per_page)),
            ("start_index", json!(self.start_index)),
            ("total_items", json!(self.total_items)),
            ("paging_link_template", json!(self.paging_link_template)),
            ("page_index", json!(self.page_index)),
            ("total_pages", json!(self.total_pages)),
            ("self_link", json!(self.self_link)),
            ("edit_link", json!(self.edit_link)),
            ("next_link", json!(self.next_link)),
            ("previous_link", json!(self.previous_link)),
            (
                "items",
                Value::Array(self.items.iter().cloned().map(Value::Object).collect()),
            ),
        ])
    }
}

impl Normalize for ErrorSection {
    fn to_document(&self) -> Document {
        let errors = self
            .errors()
            .iter()
            .map(|detail| Value::Object(detail.to_document()))
            .collect();
        document([
            ("code", json!(self.code)),
            ("message", json!(self.message)),
            ("errors", Value::Array(errors)),
        ])
    }
}

impl Normalize for ErrorDetail {
    fn to_document(&self) -> Document {
        document([
            ("domain", json!(self.domain)),
            ("reason", json!(self.reason)),
            ("message", json!(self.message)),
            ("location", json!(self.location)),
            ("location_type", json!(self.location_type)),
            ("extended_help", json!(self.extended_help)),
            ("send_report", json!(self.send_report)),
        ])
    }
}

impl Normalize for ParamsSection {
    fn to_document(&self) -> Document {
        let map = |params: &Option<Document>| params.clone().map_or(Value::Null, Value::Object);
        document([
            ("search_params", map(&self.search_params)),
            ("filter_params", map(&self.filter_params)),
            ("sort_params", map(&self.sort_params)),
            ("pagination_params", map(&self.pagination_params)),
        ])
    }
}
