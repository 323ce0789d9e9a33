use std::sync::Arc;

use stockroom::session::{SessionAction, SessionReducer, SessionState, User};
use stockroom::store::Reducer;

fn fran() -> User {
    User {
        id: 2,
        user_name: "Fran".to_string(),
        is_admin: false,
    }
}

#[test]
fn mask_user_name_toggles_the_stored_value() {
    let state = Arc::new(SessionState::default());
    assert!(state.mask_user_name);

    let next = SessionReducer::reduce(state, &SessionAction::MaskUserName);
    assert!(!next.mask_user_name);

    let next = SessionReducer::reduce(next, &SessionAction::MaskUserName);
    assert!(next.mask_user_name);
}

#[test]
fn mask_user_name_keeps_the_current_user() {
    let state = Arc::new(SessionState {
        mask_user_name: true,
        current_user: Some(fran()),
    });
    let next = SessionReducer::reduce(state, &SessionAction::MaskUserName);
    assert_eq!(next.current_user, Some(fran()));
}

#[test]
fn set_current_user_stores_the_user() {
    let state = Arc::new(SessionState::default());
    let next = SessionReducer::reduce(state, &SessionAction::SetCurrentUser(fran()));
    assert_eq!(next.current_user, Some(fran()));
}

#[test]
fn clear_current_user_logs_out() {
    let state = Arc::new(SessionState {
        mask_user_name: false,
        current_user: Some(fran()),
    });
    let next = SessionReducer::reduce(state, &SessionAction::ClearCurrentUser);
    assert_eq!(next.current_user, None);
    assert!(!next.mask_user_name);
}
