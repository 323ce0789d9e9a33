//! Terminal product catalog and login demo built on a unidirectional
//! state container.
//!
//! All application data lives in a single [`state::AppState`] owned by a
//! [`store::Store`]. Views dispatch [`state::Action`]s, pure reducers
//! produce new state snapshots, memoized selectors derive view values, and
//! the catalog effect layer turns `Load` actions into asynchronous fetches.

pub mod catalog;
pub mod config;
pub mod session;
pub mod state;
pub mod store;
pub mod ui;
