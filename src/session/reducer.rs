use std::sync::Arc;

use crate::session::action::SessionAction;
use crate::session::state::SessionState;
use crate::store::Reducer;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;

    fn reduce(state: Arc<SessionState>, action: &SessionAction) -> Arc<SessionState> {
        match action {
            SessionAction::MaskUserName => Arc::new(SessionState {
                mask_user_name: !state.mask_user_name,
                ..state.as_ref().clone()
            }),
            SessionAction::SetCurrentUser(user) => Arc::new(SessionState {
                current_user: Some(user.clone()),
                ..state.as_ref().clone()
            }),
            SessionAction::ClearCurrentUser => Arc::new(SessionState {
                current_user: None,
                ..state.as_ref().clone()
            }),
        }
    }
}
