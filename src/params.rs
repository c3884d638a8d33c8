//! Filter, sort, and pagination parameters for list endpoints.
//!
//! Every list/search endpoint accepts the same family of query parameters.
//! [`QueryParams`] is the seam the external HTTP layer consumes: it turns a
//! params value into the flat key/value mapping appended to the request URL.
//! Building the mapping never fails and performs no validation; bounds
//! checking is left to the remote service.

use std::collections::HashMap;

/// Conversion into the flat query mapping sent with a list request.
pub trait QueryParams {
    /// Returns the key/value pairs to append to the request's query string.
    ///
    /// Every key is always present, even when its value is empty; the API
    /// expects explicit defaults rather than omitted keys.
    fn params(&self) -> HashMap<String, String>;
}

/// Filter and sort parameters shared by all list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicQueryParams {
    /// Status filter, e.g. `"subscribed"`. Empty means no filter.
    pub status: String,
    /// Field the result list is sorted by.
    pub sort_field: String,
    /// Sort direction, `"ASC"` or `"DESC"`.
    pub sort_dir: String,
    /// Fields to include in the response.
    pub fields: Vec<String>,
    /// Fields to exclude from the response. Not checked for overlap with
    /// `fields`; the server resolves conflicts.
    pub exclude_fields: Vec<String>,
    /// Skip server-side merge field validation on write endpoints.
    pub skip_merge_validation: bool,
}

impl BasicQueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn sort_field(mut self, field: impl Into<String>) -> Self {
        self.sort_field = field.into();
        self
    }

    pub fn sort_dir(mut self, dir: impl Into<String>) -> Self {
        self.sort_dir = dir.into();
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn skip_merge_validation(mut self, skip: bool) -> Self {
        self.skip_merge_validation = skip;
        self
    }
}

impl QueryParams for BasicQueryParams {
    fn params(&self) -> HashMap<String, String> {
        HashMap::from([
            ("status".to_string(), self.status.clone()),
            ("sort_field".to_string(), self.sort_field.clone()),
            ("sort_dir".to_string(), self.sort_dir.clone()),
            ("fields".to_string(), self.fields.join(",")),
            ("exclude_fields".to_string(), self.exclude_fields.join(",")),
            (
                "skip_merge_validation".to_string(),
                self.skip_merge_validation.to_string(),
            ),
        ])
    }
}

/// [`BasicQueryParams`] plus the `count`/`offset` pagination window.
///
/// Composition is explicit: the basic portion lives in [`Self::basic`] and
/// [`QueryParams::params`] delegates to it before adding the two pagination
/// keys. `count` and `offset` are emitted verbatim, including zero and
/// negative values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendedQueryParams {
    pub basic: BasicQueryParams,
    /// Number of records to return.
    pub count: i64,
    /// Number of records to skip from the start of the list.
    pub offset: i64,
}

impl ExtendedQueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn paginate(mut self, count: i64, offset: i64) -> Self {
        self.count = count;
        self.offset = offset;
        self
    }
}

impl From<BasicQueryParams> for ExtendedQueryParams {
    fn from(basic: BasicQueryParams) -> Self {
        Self {
            basic,
            ..Self::default()
        }
    }
}

impl QueryParams for ExtendedQueryParams {
    fn params(&self) -> HashMap<String, String> {
        let mut params = self.basic.params();
        params.insert("count".to_string(), self.count.to_string());
        params.insert("offset".to_string(), self.offset.to_string());
        params
    }
}

/// Encodes the mapping produced by [`QueryParams::params`] into a URL query
/// string.
///
/// Pairs are sorted by key first; map iteration order is unspecified and the
/// encoded string must be stable for equal inputs.
pub fn to_query_string<P>(params: &P) -> String
where
    P: QueryParams + ?Sized,
{
    let mut pairs: Vec<(String, String)> = params.params().into_iter().collect();
    pairs.sort();

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    let encoded = serializer.finish();

    log::debug!("encoded {} query parameters", pairs.len());

    encoded
}
