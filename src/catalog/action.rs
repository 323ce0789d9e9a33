use crate::catalog::product::Product;
use crate::store::SliceAction;

/// Events the product catalog reacts to.
#[derive(Clone, Debug)]
pub enum CatalogAction {
    /// Show or hide the product code column.
    ToggleProductCode(bool),
    /// Select an existing product.
    SetCurrentProduct(Product),
    /// Drop the selection.
    ClearCurrentProduct,
    /// Start editing a fresh, unsaved product.
    InitializeCurrentProduct,
    /// Request a catalog fetch. The slice itself does not change; the
    /// effect layer picks this up.
    Load,
    /// Fetch finished with the full product list.
    LoadSuccess(Vec<Product>),
    /// Fetch failed; payload is the user-facing message.
    LoadFail(String),
}

impl SliceAction for CatalogAction {}
