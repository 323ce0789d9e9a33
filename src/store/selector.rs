//! Memoized selectors.
//!
//! A selector composes a feature accessor (`Root -> Arc<Slice>`) with a
//! projection (`Slice -> T`). Because reducers only allocate a new slice
//! when a value actually changes, the selector can short-circuit on pointer
//! equality of the slice and skip the projection entirely.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

struct Memo<Sl, T> {
    input: Arc<Sl>,
    output: T,
}

/// A pure, memoized projection from the composite state to a derived value.
///
/// The memo holds the last slice pointer and the value projected from it.
/// `select` recomputes only when the slice identity changed.
pub struct Selector<Root, Sl, T> {
    slice: fn(&Root) -> Arc<Sl>,
    project: Box<dyn Fn(&Sl) -> T + Send + Sync>,
    memo: Mutex<Option<Memo<Sl, T>>>,
    recomputed: AtomicU64,
}

impl<Root, Sl, T: Clone> Selector<Root, Sl, T> {
    pub fn new(
        slice: fn(&Root) -> Arc<Sl>,
        project: impl Fn(&Sl) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            slice,
            project: Box::new(project),
            memo: Mutex::new(None),
            recomputed: AtomicU64::new(0),
        }
    }

    /// Derive the value for `root`, reusing the memo when the feature slice
    /// is reference-unchanged.
    pub fn select(&self, root: &Root) -> T {
        let slice = (self.slice)(root);
        let mut memo = self.memo.lock();
        if let Some(memo) = memo.as_ref() {
            if Arc::ptr_eq(&memo.input, &slice) {
                return memo.output.clone();
            }
        }
        let output = (self.project)(&slice);
        self.recomputed.fetch_add(1, Ordering::Relaxed);
        *memo = Some(Memo {
            input: slice,
            output: output.clone(),
        });
        output
    }

    /// Number of times the projection has actually run.
    pub fn recomputations(&self) -> u64 {
        self.recomputed.load(Ordering::Relaxed)
    }
}
