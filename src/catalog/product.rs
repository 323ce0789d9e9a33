use serde::{Deserialize, Serialize};

/// A catalog entry. `id` is stable and unique within the collection.
///
/// Field names are camelCased on the wire to match the product API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub product_code: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Fresh, unsaved product template. Its id of 0 is the sentinel the
    /// catalog slice uses for "currently editing a new product".
    pub fn template() -> Self {
        Self {
            id: 0,
            product_name: String::new(),
            product_code: "New".to_string(),
            description: String::new(),
            price: 0.0,
        }
    }
}
