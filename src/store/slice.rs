//! Base trait for feature state slices.

/// Marker trait for feature slice values.
///
/// Slices should be:
/// - Immutable (a reducer clones into a fresh value, never patches in place)
/// - Self-contained (all data the feature's views need)
/// - Comparable (PartialEq for detecting value changes)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
