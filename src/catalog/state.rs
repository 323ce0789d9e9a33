use crate::catalog::product::Product;
use crate::store::SliceState;

/// State for the product catalog feature.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    /// Whether the product code column is displayed.
    pub show_product_code: bool,
    /// Identity of the selected product. `Some(0)` marks the fresh
    /// template created by `InitializeCurrentProduct`.
    pub current_product_id: Option<i64>,
    pub products: Vec<Product>,
    /// Last load failure, empty when the last load succeeded.
    pub error: String,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            show_product_code: true,
            current_product_id: None,
            products: Vec::new(),
            error: String::new(),
        }
    }
}

impl SliceState for CatalogState {}
