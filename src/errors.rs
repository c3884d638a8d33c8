//! Error envelope returned by the API in place of a resource body.

use serde::Deserialize;
use thiserror::Error;

/// A single field-level validation failure carried by an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldError {
    /// Name of the submitted field that failed validation.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

/// JSON error envelope the API returns for failed requests.
///
/// Every field tolerates absence on decode, so a response body can be probed
/// for the envelope shape before being decoded as a resource: the envelope
/// signals an actual error only when [`ApiError::has_error`] is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Error)]
#[serde(default)]
#[error("{status} : {kind} : {title} : {detail} : {errors:?}")]
pub struct ApiError {
    /// URL of the problem-type documentation; empty when the request
    /// succeeded.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short summary of the problem type.
    pub title: String,
    /// HTTP-style status code.
    pub status: i32,
    /// Human-readable explanation specific to this occurrence.
    pub detail: String,
    /// URI identifying this specific occurrence.
    pub instance: String,
    /// Support reference number.
    #[serde(rename = "ref_no")]
    pub reference_number: String,
    /// Per-field validation failures, if any.
    pub errors: Vec<FieldError>,
}

impl ApiError {
    /// True when the response carried an error rather than a resource.
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.kind.is_empty()
    }
}
