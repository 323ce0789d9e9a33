//! Stand-in credential check.
//!
//! The demo accepts any non-empty credential pair; a user name containing
//! "admin" gets the admin flag. Real authentication is a different system's
//! problem; this exists so the login screen has something to dispatch.

use crate::session::action::SessionAction;
use crate::session::user::User;
use crate::store::Store;

pub fn authenticate(user_name: &str, password: &str) -> Option<User> {
    if user_name.is_empty() || password.is_empty() {
        return None;
    }
    Some(User {
        id: 2,
        user_name: user_name.to_string(),
        is_admin: user_name.to_ascii_lowercase().contains("admin"),
    })
}

/// Check credentials and, on success, dispatch `SetCurrentUser`.
pub fn log_in(store: &Store, user_name: &str, password: &str) -> bool {
    match authenticate(user_name, password) {
        Some(user) => {
            tracing::info!(user = %user.user_name, "logged in");
            store.dispatch(SessionAction::SetCurrentUser(user).into());
            true
        }
        None => false,
    }
}

pub fn log_out(store: &Store) {
    tracing::info!("logged out");
    store.dispatch(SessionAction::ClearCurrentUser.into());
}
