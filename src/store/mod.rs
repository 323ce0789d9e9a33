//! State-container primitives.
//!
//! This module provides the building blocks for unidirectional data flow:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selector ──→ View
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable feature slices held behind `Arc`
//! - **Action**: user interactions or effect outcomes
//! - **Reducer**: pure function that transforms a slice based on actions
//! - **Selector**: memoized projection from state to a derived value
//! - **Store**: owns the composite state, serializes dispatches, notifies
//!   subscribers

mod action;
mod reducer;
mod selector;
mod slice;
mod store;
mod subscription;

pub use action::SliceAction;
pub use reducer::Reducer;
pub use selector::Selector;
pub use slice::SliceState;
pub use store::Store;
pub use subscription::Subscription;
