use std::sync::Arc;

use crate::catalog::action::CatalogAction;
use crate::catalog::state::CatalogState;
use crate::store::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Action = CatalogAction;

    fn reduce(state: Arc<CatalogState>, action: &CatalogAction) -> Arc<CatalogState> {
        match action {
            CatalogAction::ToggleProductCode(show) => Arc::new(CatalogState {
                show_product_code: *show,
                ..state.as_ref().clone()
            }),
            CatalogAction::SetCurrentProduct(product) => Arc::new(CatalogState {
                current_product_id: Some(product.id),
                ..state.as_ref().clone()
            }),
            CatalogAction::ClearCurrentProduct => Arc::new(CatalogState {
                current_product_id: None,
                ..state.as_ref().clone()
            }),
            CatalogAction::InitializeCurrentProduct => Arc::new(CatalogState {
                current_product_id: Some(0),
                ..state.as_ref().clone()
            }),
            // Slice-level no-op: the effect layer reacts to Load.
            CatalogAction::Load => state,
            CatalogAction::LoadSuccess(products) => Arc::new(CatalogState {
                products: products.clone(),
                error: String::new(),
                ..state.as_ref().clone()
            }),
            CatalogAction::LoadFail(message) => Arc::new(CatalogState {
                error: message.clone(),
                ..state.as_ref().clone()
            }),
        }
    }
}
