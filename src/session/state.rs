use crate::session::user::User;
use crate::store::SliceState;

/// State for the user session feature.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Whether the login screen masks the user name input.
    pub mask_user_name: bool,
    pub current_user: Option<User>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            mask_user_name: true,
            current_user: None,
        }
    }
}

impl SliceState for SessionState {}
