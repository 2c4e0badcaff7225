//! Reactive signal storage
//!
//! A deliberately small signal system: components store their values in a
//! central graph and hold cheap typed handles to them. Writes bump a version
//! counter so callers can detect changes without comparing values.
//!
//! # State
//!
//! The [`State<T>`] type is the primary API for component state. It wraps a
//! signal with thread-safe access to the graph and a dirty flag used to
//! request UI rebuilds.
//!
//! ```ignore
//! use opal_core::context_state::use_state_keyed;
//!
//! let filter = use_state_keyed("quick_select_filter", String::new);
//!
//! let current = filter.get();
//! filter.set_rebuild("ba".to_string());
//! ```

use slotmap::{new_key_type, SlotMap};
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Unique identifier for a signal
    pub struct SignalId;
}

impl SignalId {
    /// Convert to a raw u64 for keyed storage
    pub fn to_raw(&self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Reconstruct from a raw u64
    pub fn from_raw(raw: u64) -> Self {
        slotmap::KeyData::from_ffi(raw).into()
    }
}

/// A typed signal handle (cheap to copy)
#[derive(Debug)]
pub struct Signal<T> {
    id: SignalId,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> Signal<T> {
    /// Get the signal's internal ID
    pub fn id(&self) -> SignalId {
        self.id
    }

    /// Reconstruct a Signal from a raw SignalId
    ///
    /// The caller must ensure the SignalId refers to a signal of type T.
    /// This is primarily for use by the keyed-state system, which stores
    /// the `TypeId` alongside the raw id.
    pub fn from_id(id: SignalId) -> Self {
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }
}

/// Internal signal storage
struct SignalNode {
    /// The signal value (type-erased)
    value: Box<dyn Any + Send>,
    /// Version counter, bumped on every write
    version: u64,
}

/// Owns every signal in the process
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalNode>,
}

impl ReactiveGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
        }
    }

    /// Create a new signal with an initial value
    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
            version: 0,
        });
        Signal {
            id,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the current value of a signal
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.signals
            .get(signal.id)
            .and_then(|node| node.value.downcast_ref::<T>().cloned())
    }

    /// Set the value of a signal
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        if let Some(node) = self.signals.get_mut(signal.id) {
            node.value = Box::new(value);
            node.version += 1;
        }
    }

    /// Update a signal using a function
    pub fn update<T: Clone + Send + 'static, F: FnOnce(T) -> T>(&mut self, signal: Signal<T>, f: F) {
        if let Some(current) = self.get(signal) {
            self.set(signal, f(current));
        }
    }

    /// Get the version of a signal (for change detection)
    pub fn signal_version(&self, id: SignalId) -> Option<u64> {
        self.signals.get(id).map(|n| n.version)
    }

    /// Number of live signals
    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared reactive graph for thread-safe access
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// Shared dirty flag for requesting UI rebuilds
pub type DirtyFlag = Arc<AtomicBool>;

/// A bound state value with direct get/set methods
///
/// Wraps a signal with shared access to the graph and the rebuild dirty
/// flag. Obtained from [`crate::context_state::use_state_keyed`].
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    reactive: SharedReactiveGraph,
    dirty_flag: DirtyFlag,
}

impl<T: Clone + Send + 'static> State<T> {
    /// Create a new State wrapper
    pub fn new(signal: Signal<T>, reactive: SharedReactiveGraph, dirty_flag: DirtyFlag) -> Self {
        Self {
            signal,
            reactive,
            dirty_flag,
        }
    }

    /// Get the current value
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.reactive
            .lock()
            .unwrap()
            .get(self.signal)
            .unwrap_or_default()
    }

    /// Get the current value, returning None if the signal is gone
    pub fn try_get(&self) -> Option<T> {
        self.reactive.lock().unwrap().get(self.signal)
    }

    /// Set a new value without requesting a tree rebuild
    ///
    /// Renderers read values at render time, so the change is picked up on
    /// the next frame. Use `set_rebuild()` when the change affects tree
    /// structure (different items, different text content).
    pub fn set(&self, value: T) {
        self.reactive.lock().unwrap().set(self.signal, value);
    }

    /// Set a new value AND request a UI tree rebuild
    pub fn set_rebuild(&self, value: T) {
        self.reactive.lock().unwrap().set(self.signal, value);
        self.dirty_flag.store(true, Ordering::SeqCst);
    }

    /// Update the value using a function
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.reactive.lock().unwrap().update(self.signal, f);
    }

    /// Update the value AND request a UI tree rebuild
    pub fn update_rebuild(&self, f: impl FnOnce(T) -> T) {
        self.reactive.lock().unwrap().update(self.signal, f);
        self.dirty_flag.store(true, Ordering::SeqCst);
    }

    /// Get the underlying signal
    pub fn signal(&self) -> Signal<T> {
        self.signal
    }

    /// Get the signal ID (for change detection)
    pub fn signal_id(&self) -> SignalId {
        self.signal.id()
    }
}
