//! Typed entities and query-parameter helpers for the Mailchimp Marketing API v3.
//!
//! The crate models the shapes the API shares across resources: the error
//! envelope ([`errors::ApiError`]), the pagination/list wrappers
//! ([`pagination::ListMeta`], [`pagination::Link`]), the passive domain
//! records under [`domain`], and the filter/sort/pagination query parameters
//! accepted by list endpoints ([`params`]).
//!
//! HTTP transport, authentication, and retries are the caller's concern: an
//! external HTTP client turns a [`params::QueryParams`] value into a request
//! URL (see [`params::to_query_string`]) and decodes response bodies into the
//! entity types or the error envelope.

pub mod domain;
pub mod errors;
pub mod pagination;
pub mod params;

/// API version the wire shapes in this crate correspond to.
pub const API_VERSION: &str = "3.0";
