//! User session feature: current user and the login-screen mask flag.

mod action;
pub mod auth;
mod reducer;
pub mod selectors;
mod state;
mod user;

pub use action::SessionAction;
pub use reducer::SessionReducer;
pub use state::SessionState;
pub use user::User;
