// Rust guideline compliant 2026-10-14

//! Core data models for Google JSON Style responses.
//!
//! The sections are plain containers. Rendering turns them into a
//! [`Document`] through [`crate::normalize`] and [`crate::optimize`].

use crate::config::Config;
use crate::identity::create_response_id;
use crate::optimize::{apply_rules, OptimizeOptions};
use crate::{Document, Result};
use serde::Deserialize;

/// Api version assigned to new envelopes.
pub const DEFAULT_API_VERSION: &str = "1.0";

/// Top-level response object wrapping a data payload or an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    /// Version of the API the response conforms to.
    #[serde(default = "default_api_version")]
    pub api_version: Option<String>,
    /// Value the client sent, echoed back unchanged.
    #[serde(default)]
    pub context: Option<String>,
    /// Server supplied identifier for the response.
    #[serde(default = "default_id")]
    pub id: Option<String>,
    /// Operation performed on the data, e.g. `people.get`.
    #[serde(default)]
    pub method: Option<String>,
    /// Input parameters of the request.
    #[serde(default = "default_section")]
    pub params: Option<ParamsSection>,
    /// Success payload.
    #[serde(default = "default_section")]
    pub data: Option<DataSection>,
    /// Error payload; takes precedence over `data`.
    #[serde(default = "default_section")]
    pub error: Option<ErrorSection>,
}

fn default_api_version() -> Option<String> {
    Some(DEFAULT_API_VERSION.to_string())
}

fn default_id() -> Option<String> {
    Some(create_response_id())
}

fn default_section<T: Default>() -> Option<T> {
    Some(T::default())
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseEnvelope {
    /// Creates an envelope with empty sections, api version "1.0" and a
    /// freshly generated id.
    pub fn new() -> Self {
        Self {
            api_version: default_api_version(),
            context: None,
            id: default_id(),
            method: None,
            params: default_section(),
            data: default_section(),
            error: default_section(),
        }
    }

    /// Creates an envelope using the configured default api version.
    ///
    /// # Arguments
    ///
    /// * `config` - Loaded configuration
    pub fn with_config(config: &Config) -> Self {
        Self {
            api_version: Some(config.default_api_version.clone()),
            ..Self::new()
        }
    }

    /// Returns the data section, creating an empty one if it was unset.
    pub fn data_mut(&mut self) -> &mut DataSection {
        self.data.get_or_insert_with(DataSection::default)
    }

    /// Returns the error section, creating an empty one if it was unset.
    pub fn error_mut(&mut self) -> &mut ErrorSection {
        self.error.get_or_insert_with(ErrorSection::default)
    }

    /// Returns the params section, creating an empty one if it was unset.
    pub fn params_mut(&mut self) -> &mut ParamsSection {
        self.params.get_or_insert_with(ParamsSection::default)
    }

    /// Renders the envelope with the default optimization options.
    ///
    /// Equivalent to `optimize(normalize(self))`. Never fails: a typed
    /// envelope always normalizes to a well-formed document.
    pub fn render(&self) -> Document {
        self.render_with(&OptimizeOptions::default())
    }

    /// Renders the envelope with explicit optimization options.
    pub fn render_with(&self, options: &OptimizeOptions) -> Document {
        apply_rules(crate::normalize::normalize(self), options)
    }

    /// Renders the envelope and serializes it to JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let rendered = self.render();
        let text = if pretty {
            serde_json::to_string_pretty(&rendered)?
        } else {
            serde_json::to_string(&rendered)?
        };
        Ok(text)
    }
}

/// Container for the data of a successful response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Response code, usually the HTTP status.
    pub code: Option<i64>,
    /// Human readable message about the response.
    pub message: Option<String>,
    /// Type of information the object stores, e.g. `user`.
    pub kind: Option<String>,
    /// Fields present in a partial GET or PATCH.
    pub fields: Option<String>,
    /// Etag of the response.
    pub etag: Option<String>,
    /// Globally unique id of the object.
    pub id: Option<String>,
    /// BCP 47 language of the other properties.
    pub lang: Option<String>,
    /// Free-form nested payload indicator.
    pub data: Option<String>,
    /// Marks a deleted entry.
    pub deleted: Option<bool>,
    /// Number of items in this result set.
    pub current_item_count: Option<u64>,
    /// Requested number of items per page.
    pub items_per_page: Option<u64>,
    /// Index of the first item in `items`.
    pub start_index: Option<u64>,
    /// Total number of items available.
    pub total_items: Option<u64>,
    /// URI template for other pages.
    pub paging_link_template: Option<String>,
    /// One-based index of the current page.
    pub page_index: Option<u64>,
    /// Total number of pages.
    pub total_pages: Option<u64>,
    /// Link to retrieve this resource.
    pub self_link: Option<String>,
    /// Link to update this resource.
    pub edit_link: Option<String>,
    /// Link to the next page.
    pub next_link: Option<String>,
    /// Link to the previous page.
    pub previous_link: Option<String>,
    /// Result items.
    pub items: Vec<Document>,
}

impl DataSection {
    /// Replaces the item list.
    pub fn set_items(&mut self, items: Vec<Document>) -> &mut Self {
        self.items = items;
        self
    }

    /// Appends a single item.
    pub fn push_item(&mut self, item: Document) -> &mut Self {
        self.items.push(item);
        self
    }
}

/// Container for the error of a failed response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ErrorSection {
    /// Error code, usually the HTTP status of the first error.
    pub code: Option<i64>,
    /// Human readable message of the first error.
    pub message: Option<String>,
    errors: Vec<ErrorDetail>,
}

impl ErrorSection {
    /// Creates an error section with a code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// Appends an error detail. Details are never replaced.
    pub fn add_error(&mut self, detail: ErrorDetail) -> &mut Self {
        self.errors.push(detail);
        self
    }

    /// Returns the error details in insertion order.
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }
}

/// Additional information about one error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    /// Service that raised the error.
    pub domain: Option<String>,
    /// Unique identifier of the error kind.
    pub reason: Option<String>,
    /// Human readable message.
    pub message: Option<String>,
    /// Location of the error.
    pub location: Option<String>,
    /// How `location` should be interpreted.
    pub location_type: Option<String>,
    /// URI of a help text.
    pub extended_help: Option<String>,
    /// URI of a report form.
    pub send_report: Option<String>,
}

impl ErrorDetail {
    /// Sets the domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the location and how to interpret it.
    #[must_use]
    pub fn with_location(
        mut self,
        location: impl Into<String>,
        location_type: impl Into<String>,
    ) -> Self {
        self.location = Some(location.into());
        self.location_type = Some(location_type.into());
        self
    }

    /// Sets the extended help URI.
    #[must_use]
    pub fn with_extended_help(mut self, extended_help: impl Into<String>) -> Self {
        self.extended_help = Some(extended_help.into());
        self
    }

    /// Sets the report URI.
    #[must_use]
    pub fn with_send_report(mut self, send_report: impl Into<String>) -> Self {
        self.send_report = Some(send_report.into());
        self
    }
}

/// Input parameters echoed with the response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParamsSection {
    /// Search terms of the request.
    pub search_params: Option<Document>,
    /// Filters applied to the result.
    pub filter_params: Option<Document>,
    /// Sort keys and directions.
    pub sort_params: Option<Document>,
    /// Requested page, offset or page size.
    pub pagination_params: Option<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_envelope_defaults() {
        let envelope = ResponseEnvelope::new();
        assert_eq!(envelope.api_version.as_deref(), Some("1.0"));
        assert!(envelope.id.as_deref().is_some_and(|id| !id.is_empty()));
        assert_eq!(envelope.data, Some(DataSection::default()));
        assert_eq!(envelope.error, Some(ErrorSection::default()));
        assert_eq!(envelope.params, Some(ParamsSection::default()));
        assert!(envelope.context.is_none());
        assert!(envelope.method.is_none());
    }

    #[test]
    fn test_envelopes_get_distinct_ids() {
        assert_ne!(ResponseEnvelope::new().id, ResponseEnvelope::new().id);
    }

    #[test]
    fn test_with_config_uses_api_version() {
        let config = Config {
            default_api_version: "2.1".to_string(),
            ..Config::default()
        };
        let envelope = ResponseEnvelope::with_config(&config);
        assert_eq!(envelope.api_version.as_deref(), Some("2.1"));
    }

    #[test]
    fn test_add_error_appends_in_order() {
        let mut error = ErrorSection::new(400, "Bad Request");
        error
            .add_error(ErrorDetail::default().with_reason("first"))
            .add_error(ErrorDetail::default().with_reason("second"));
        let reasons: Vec<_> = error
            .errors()
            .iter()
            .filter_map(|detail| detail.reason.as_deref())
            .collect();
        assert_eq!(reasons, vec!["first", "second"]);
    }

    #[test]
    fn test_mut_accessors_recreate_unset_sections() {
        let mut envelope = ResponseEnvelope::new();
        envelope.data = None;
        envelope.data_mut().code = Some(200);
        assert_eq!(envelope.data.as_ref().and_then(|d| d.code), Some(200));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({"method": "people.get"})).unwrap();
        assert_eq!(envelope.api_version.as_deref(), Some("1.0"));
        assert!(envelope.id.is_some());
        assert_eq!(envelope.method.as_deref(), Some("people.get"));
        assert_eq!(envelope.data, Some(DataSection::default()));
    }

    #[test]
    fn test_deserialize_explicit_null_unsets_section() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({"data": null, "api_version": null})).unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.api_version.is_none());
    }

    #[test]
    fn test_deserialize_rejects_wrong_types() {
        let result =
            serde_json::from_value::<ResponseEnvelope>(json!({"error": {"code": "404"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_error_details() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "error": {"code": 400, "errors": [{"reason": "invalidParameter"}]}
        }))
        .unwrap();
        let error = envelope.error.unwrap();
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].reason.as_deref(), Some("invalidParameter"));
    }
}
