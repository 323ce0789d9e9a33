mod common;

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{product, store_with_catalog, wait_until};
use stockroom::catalog::gateway::StatusCode;
use stockroom::catalog::{
    CatalogAction, CatalogEffects, CatalogState, FixtureGateway, GatewayError, Product,
    ProductGateway,
};
use stockroom::session::SessionAction;
use stockroom::store::Store;

#[derive(Clone)]
struct FailingGateway;

impl ProductGateway for FailingGateway {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, GatewayError>> + Send {
        async { Err(GatewayError::Status(StatusCode::INTERNAL_SERVER_ERROR)) }
    }
}

#[derive(Clone, Default)]
struct CountingGateway {
    calls: Arc<AtomicUsize>,
    products: Vec<Product>,
}

impl ProductGateway for CountingGateway {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, GatewayError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let products = self.products.clone();
        async move { Ok(products) }
    }
}

#[tokio::test]
async fn load_success_flows_into_the_store() {
    let store = Store::new(Default::default());
    let _effects = CatalogEffects::spawn(
        store.clone(),
        FixtureGateway::new(vec![product(1, "Widget")]),
    );

    store.dispatch(CatalogAction::Load.into());
    wait_until("products to load", || !store.state().catalog.products.is_empty()).await;

    let state = store.state();
    assert_eq!(state.catalog.products, vec![product(1, "Widget")]);
    assert_eq!(state.catalog.error, "");
}

#[tokio::test]
async fn load_failure_sets_the_error_and_keeps_products() {
    let store = store_with_catalog(CatalogState {
        products: vec![product(1, "Leaf Rake")],
        ..CatalogState::default()
    });
    let _effects = CatalogEffects::spawn(store.clone(), FailingGateway);

    store.dispatch(CatalogAction::Load.into());
    wait_until("error to surface", || !store.state().catalog.error.is_empty()).await;

    let state = store.state();
    assert!(state.catalog.error.contains("500"), "got: {}", state.catalog.error);
    assert_eq!(state.catalog.products, vec![product(1, "Leaf Rake")]);
}

#[tokio::test]
async fn overlapping_loads_fetch_independently() {
    let gateway = CountingGateway {
        calls: Arc::new(AtomicUsize::new(0)),
        products: vec![product(1, "Widget")],
    };
    let calls = Arc::clone(&gateway.calls);
    let store = Store::new(Default::default());
    let _effects = CatalogEffects::spawn(store.clone(), gateway);

    store.dispatch(CatalogAction::Load.into());
    store.dispatch(CatalogAction::Load.into());

    wait_until("both fetches to run", || calls.load(Ordering::SeqCst) == 2).await;
    wait_until("products to load", || !store.state().catalog.products.is_empty()).await;
}

#[tokio::test]
async fn only_load_triggers_a_fetch() {
    let gateway = CountingGateway::default();
    let calls = Arc::clone(&gateway.calls);
    let store = Store::new(Default::default());
    let _effects = CatalogEffects::spawn(store.clone(), gateway);

    store.dispatch(CatalogAction::LoadSuccess(vec![product(1, "Widget")]).into());
    store.dispatch(SessionAction::MaskUserName.into());
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
