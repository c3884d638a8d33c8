//! Street address attached to customers and orders.

use serde::{Deserialize, Serialize};

/// Postal address with optional geolocation.
///
/// The API always serializes every field; absent values decode to their
/// defaults.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Address {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub province: String,
    pub province_code: String,
    pub postal_code: String,
    pub country: String,
    pub country_code: String,
    pub longitude: f64,
    pub latitude: f64,
}
