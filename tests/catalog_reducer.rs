mod common;

use std::sync::Arc;

use common::product;
use stockroom::catalog::{CatalogAction, CatalogReducer, CatalogState};
use stockroom::store::Reducer;

fn seeded() -> Arc<CatalogState> {
    Arc::new(CatalogState {
        show_product_code: true,
        current_product_id: Some(2),
        products: vec![product(1, "Leaf Rake"), product(2, "Garden Cart")],
        error: "previous failure".to_string(),
    })
}

#[test]
fn toggle_sets_flag_from_payload() {
    let state = seeded();
    let next = CatalogReducer::reduce(state, &CatalogAction::ToggleProductCode(false));
    assert!(!next.show_product_code);

    let next = CatalogReducer::reduce(next, &CatalogAction::ToggleProductCode(true));
    assert!(next.show_product_code);
}

#[test]
fn toggle_is_idempotent_under_double_application() {
    let state = seeded();
    let once = CatalogReducer::reduce(state, &CatalogAction::ToggleProductCode(true));
    let twice = CatalogReducer::reduce(Arc::clone(&once), &CatalogAction::ToggleProductCode(true));
    assert!(twice.show_product_code);
    assert_eq!(*once, *twice);
}

#[test]
fn toggle_leaves_other_fields_unchanged() {
    let state = seeded();
    let next = CatalogReducer::reduce(Arc::clone(&state), &CatalogAction::ToggleProductCode(false));
    assert_eq!(next.current_product_id, state.current_product_id);
    assert_eq!(next.products, state.products);
    assert_eq!(next.error, state.error);
}

#[test]
fn set_current_product_stores_its_identity() {
    let state = seeded();
    let next = CatalogReducer::reduce(state, &CatalogAction::SetCurrentProduct(product(1, "Leaf Rake")));
    assert_eq!(next.current_product_id, Some(1));
}

#[test]
fn clear_current_product_empties_selection_regardless_of_prior() {
    let next = CatalogReducer::reduce(seeded(), &CatalogAction::ClearCurrentProduct);
    assert_eq!(next.current_product_id, None);

    let next = CatalogReducer::reduce(
        Arc::new(CatalogState::default()),
        &CatalogAction::ClearCurrentProduct,
    );
    assert_eq!(next.current_product_id, None);
}

#[test]
fn initialize_current_product_selects_the_template_sentinel() {
    let next = CatalogReducer::reduce(seeded(), &CatalogAction::InitializeCurrentProduct);
    assert_eq!(next.current_product_id, Some(0));
}

#[test]
fn load_is_a_reference_identical_noop() {
    let state = seeded();
    let next = CatalogReducer::reduce(Arc::clone(&state), &CatalogAction::Load);
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn load_success_replaces_products_and_clears_error() {
    let state = seeded();
    let incoming = vec![product(7, "Hammer"), product(8, "Saw")];
    let next = CatalogReducer::reduce(state, &CatalogAction::LoadSuccess(incoming.clone()));
    assert_eq!(next.products, incoming);
    assert_eq!(next.error, "");
}

#[test]
fn load_fail_sets_message_and_keeps_products() {
    let state = seeded();
    let next = CatalogReducer::reduce(Arc::clone(&state), &CatalogAction::LoadFail("network down".to_string()));
    assert_eq!(next.error, "network down");
    assert_eq!(next.products, state.products);
}
