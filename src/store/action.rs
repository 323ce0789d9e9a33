//! Base trait for actions (user/system events).

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User interactions (toggles, selections, form submissions)
/// - Effect outcomes (fetch success, fetch failure)
///
/// Actions are processed by reducers to produce new slice values. They are
/// `Clone` because the store fans each one out to the effect taps, and
/// `Debug` because every dispatch is logged.
pub trait SliceAction: Clone + Debug + Send + 'static {}
