//! Selectors over the session slice.

use std::sync::Arc;

use crate::session::state::SessionState;
use crate::session::user::User;
use crate::state::AppState;
use crate::store::Selector;

pub type SessionSelector<T> = Selector<AppState, SessionState, T>;

fn slice(state: &AppState) -> Arc<SessionState> {
    Arc::clone(&state.session)
}

pub fn mask_user_name() -> SessionSelector<bool> {
    Selector::new(slice, |session| session.mask_user_name)
}

pub fn current_user() -> SessionSelector<Option<User>> {
    Selector::new(slice, |session| session.current_user.clone())
}
