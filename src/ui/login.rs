//! Login form state.
//!
//! Form contents and validation stay local to the view; only a successful
//! login reaches the state container (as `SetCurrentUser`).

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    UserName,
    Password,
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub user_name: String,
    pub password: String,
    pub focus: LoginField,
    /// Local validation message; never enters the store.
    pub error: String,
}

impl LoginForm {
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::UserName => LoginField::Password,
            LoginField::Password => LoginField::UserName,
        };
    }

    pub fn push_char(&mut self, ch: char) {
        match self.focus {
            LoginField::UserName => self.user_name.push(ch),
            LoginField::Password => self.password.push(ch),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            LoginField::UserName => self.user_name.pop(),
            LoginField::Password => self.password.pop(),
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.user_name.trim().is_empty() || self.password.is_empty() {
            return Err("Please enter a user name and password.");
        }
        Ok(())
    }
}
