//! Selectors over the catalog slice.
//!
//! Each call builds a fresh selector with its own memo, so a view owns the
//! selectors it binds and their caches die with it.

use std::sync::Arc;

use crate::catalog::product::Product;
use crate::catalog::state::CatalogState;
use crate::state::AppState;
use crate::store::Selector;

pub type CatalogSelector<T> = Selector<AppState, CatalogState, T>;

fn slice(state: &AppState) -> Arc<CatalogState> {
    Arc::clone(&state.catalog)
}

pub fn products() -> CatalogSelector<Vec<Product>> {
    Selector::new(slice, |catalog| catalog.products.clone())
}

pub fn show_product_code() -> CatalogSelector<bool> {
    Selector::new(slice, |catalog| catalog.show_product_code)
}

pub fn error() -> CatalogSelector<String> {
    Selector::new(slice, |catalog| catalog.error.clone())
}

/// The selected entity, derived from the selection id and the collection.
///
/// `Some(0)` yields the unsaved template rather than a collection lookup.
pub fn current_product() -> CatalogSelector<Option<Product>> {
    Selector::new(slice, |catalog| match catalog.current_product_id {
        None => None,
        Some(0) => Some(Product::template()),
        Some(id) => catalog.products.iter().find(|p| p.id == id).cloned(),
    })
}
