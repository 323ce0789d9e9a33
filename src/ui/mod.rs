//! Terminal view layer.
//!
//! Views dispatch actions on user interaction and read memoized selectors
//! when drawing; no business logic lives here.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod login;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
