//! Postal contact information for a list owner.

use serde::{Deserialize, Serialize};

/// A single contact as required on every audience list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    pub company: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(rename = "phone")]
    pub phone_number: String,
}
