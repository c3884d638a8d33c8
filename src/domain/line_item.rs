//! Cart and order line items.

use serde::{Deserialize, Serialize};

/// One product variant within a cart or order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LineItem {
    pub id: String,
    pub product_id: String,
    pub product_variant_id: String,
    pub quantity: i64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_variant_title: Option<String>,
}
