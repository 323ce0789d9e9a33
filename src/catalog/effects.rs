//! Bridge between the pure catalog reducer and the impure fetch world.
//!
//! The effect task drains the store's action tap. Every observed `Load`
//! spawns one independent fetch; overlapping loads run as overlapping
//! fetches (no de-duplication, no cancellation). Each fetch outcome comes
//! back as exactly one `LoadSuccess` or `LoadFail` dispatch. Effects never
//! touch state directly.

use tokio::task::JoinHandle;

use crate::catalog::action::CatalogAction;
use crate::catalog::gateway::ProductGateway;
use crate::state::Action;
use crate::store::Store;

pub struct CatalogEffects;

impl CatalogEffects {
    /// Spawn the effect task. The task holds a store clone, so it lives
    /// until the runtime shuts down.
    pub fn spawn<G>(store: Store, gateway: G) -> JoinHandle<()>
    where
        G: ProductGateway + Clone + Send + Sync + 'static,
    {
        let mut actions = store.actions();
        tokio::spawn(async move {
            while let Some(action) = actions.recv().await {
                if !matches!(action, Action::Catalog(CatalogAction::Load)) {
                    continue;
                }
                let gateway = gateway.clone();
                let store = store.clone();
                tokio::spawn(async move {
                    match gateway.fetch_products().await {
                        Ok(products) => {
                            tracing::info!(count = products.len(), "product load succeeded");
                            store.dispatch(CatalogAction::LoadSuccess(products).into());
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "product load failed");
                            store.dispatch(CatalogAction::LoadFail(err.to_string()).into());
                        }
                    }
                });
            }
        })
    }
}
