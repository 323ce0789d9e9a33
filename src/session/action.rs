use crate::session::user::User;
use crate::store::SliceAction;

/// Events the user session reacts to.
#[derive(Clone, Debug)]
pub enum SessionAction {
    /// Flip the user-name masking flag. Carries no payload; the reducer
    /// toggles the stored value.
    MaskUserName,
    /// A login succeeded.
    SetCurrentUser(User),
    /// Log out.
    ClearCurrentUser,
}

impl SliceAction for SessionAction {}
