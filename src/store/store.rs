//! The state container.
//!
//! The store exclusively owns the composite [`AppState`]. Consumers receive
//! snapshot clones (cheap, the slices are `Arc`s) or derived values through
//! selectors; nothing outside a reducer ever mutates state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::state::{reduce, Action, AppState};
use crate::store::selector::Selector;
use crate::store::subscription::Subscription;

type Callback = Arc<dyn Fn(&AppState) + Send + Sync>;

struct Entry {
    id: u64,
    callback: Callback,
}

struct StoreInner {
    state: Mutex<AppState>,
    subscribers: Mutex<Vec<Entry>>,
    next_id: AtomicU64,
    taps: Mutex<Vec<mpsc::UnboundedSender<Action>>>,
}

/// The application's state container.
///
/// Clones share one inner container, so the composition root constructs a
/// single `Store` and hands clones to the view layer and the effect layer.
/// There is no ambient global instance.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(initial),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                taps: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Dispatch an action: reduce to the next state, forward the action to
    /// the effect taps, then notify subscribers with the new snapshot.
    ///
    /// One dispatch runs to completion before the next begins; the state
    /// lock is released before any callback runs, so callbacks may dispatch
    /// follow-up actions.
    pub fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatch");
        let next = {
            let mut state = self.inner.state.lock();
            let next = reduce(&state, &action);
            *state = next.clone();
            next
        };

        self.inner
            .taps
            .lock()
            .retain(|tap| tap.send(action.clone()).is_ok());

        let callbacks: Vec<Callback> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|entry| Arc::clone(&entry.callback))
            .collect();
        for callback in callbacks {
            callback(&next);
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.inner.state.lock().clone()
    }

    /// Register a raw state observer, invoked after every dispatch.
    ///
    /// The observer is unregistered when the returned handle is dropped.
    pub fn subscribe(&self, callback: impl Fn(&AppState) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().push(Entry {
            id,
            callback: Arc::new(callback),
        });

        let inner: Weak<StoreInner> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.subscribers.lock().retain(|entry| entry.id != id);
            }
        })
    }

    /// Register a derived-value observer.
    ///
    /// The callback fires once immediately with the current value, then only
    /// when the selected value changes.
    pub fn watch<Sl, T>(
        &self,
        selector: Selector<AppState, Sl, T>,
        callback: impl Fn(&T) + Send + Sync + 'static,
    ) -> Subscription
    where
        Sl: Send + Sync + 'static,
        T: Clone + PartialEq + Send + 'static,
    {
        let initial = selector.select(&self.state());
        callback(&initial);
        let last = Mutex::new(initial);

        self.subscribe(move |state| {
            let value = selector.select(state);
            let mut last = last.lock();
            if *last != value {
                *last = value.clone();
                drop(last);
                callback(&value);
            }
        })
    }

    /// Open an action tap for the effect layer.
    ///
    /// Every dispatched action is delivered to every open tap, in dispatch
    /// order. A tap whose receiver is gone is discarded on the next
    /// dispatch.
    pub fn actions(&self) -> mpsc::UnboundedReceiver<Action> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.taps.lock().push(tx);
        rx
    }
}
