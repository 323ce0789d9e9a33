//! Composite application state and the action sum type.
//!
//! Feature slices are registered here under fixed fields; a slice is only
//! ever produced by its own reducer. Slices live behind `Arc` so that a
//! dispatch which does not touch a slice leaves its pointer identity
//! intact, which is what selector memoization keys on.

use std::sync::Arc;

use crate::catalog::{CatalogAction, CatalogReducer, CatalogState};
use crate::config::Config;
use crate::session::{SessionAction, SessionReducer, SessionState};
use crate::store::Reducer;

/// The whole application state: one field per feature slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub catalog: Arc<CatalogState>,
    pub session: Arc<SessionState>,
}

impl AppState {
    /// Initial state with the configured display defaults applied.
    pub fn from_config(config: &Config) -> Self {
        Self {
            catalog: Arc::new(CatalogState {
                show_product_code: config.catalog.show_product_code,
                ..CatalogState::default()
            }),
            session: Arc::new(SessionState {
                mask_user_name: config.session.mask_user_name,
                ..SessionState::default()
            }),
        }
    }
}

/// Every event that can occur in the system, routed by feature.
#[derive(Clone, Debug)]
pub enum Action {
    Catalog(CatalogAction),
    Session(SessionAction),
}

impl From<CatalogAction> for Action {
    fn from(action: CatalogAction) -> Self {
        Action::Catalog(action)
    }
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Action::Session(action)
    }
}

/// Route an action to its slice's reducer. The other slice's `Arc` is
/// carried over untouched.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::Catalog(action) => AppState {
            catalog: CatalogReducer::reduce(Arc::clone(&state.catalog), action),
            session: Arc::clone(&state.session),
        },
        Action::Session(action) => AppState {
            catalog: Arc::clone(&state.catalog),
            session: SessionReducer::reduce(Arc::clone(&state.session), action),
        },
    }
}
