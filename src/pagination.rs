//! List wrappers and hypermedia links shared by every collection resource.

use serde::{Deserialize, Serialize};

/// Hypermedia link the API attaches to resources and lists.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Link {
    /// Relation of the linked resource. The wire name is `re`, not `rel`.
    #[serde(rename = "re")]
    pub rel: String,
    pub href: String,
    pub method: String,
    #[serde(rename = "targetSchema")]
    pub target_schema: String,
    pub schema: String,
}

/// Pagination metadata common to all list responses.
///
/// Concrete list types embed this with `#[serde(flatten)]` next to their
/// resource-specific item vector.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ListMeta {
    /// Total number of items matching the query, across all pages.
    pub total_items: i64,
    #[serde(rename = "_links")]
    pub links: Vec<Link>,
}
