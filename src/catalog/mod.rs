//! Product catalog feature: slice, actions, reducer, selectors, and the
//! load effect with its fetch collaborator.

mod action;
pub mod effects;
pub mod gateway;
mod product;
mod reducer;
pub mod selectors;
mod state;

pub use action::CatalogAction;
pub use effects::CatalogEffects;
pub use gateway::{FixtureGateway, GatewayError, HttpProductGateway, ProductGateway};
pub use product::Product;
pub use reducer::CatalogReducer;
pub use state::CatalogState;
