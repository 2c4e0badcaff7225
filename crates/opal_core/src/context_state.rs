//! Keyed component state
//!
//! `ContextState` is a process-wide singleton that lets components create
//! internal state without leaking it into their public API:
//!
//! ```ignore
//! // The component owns its filter text; the caller never sees the cell.
//! let filter = use_state_keyed("quick_select:42_filter", String::new);
//! ```
//!
//! Each keyed signal is identified by the hash of a caller key plus the
//! value type, so state survives across UI rebuilds: rebuilding a component
//! with the same key reattaches to the same signal instead of resetting it.
//!
//! The singleton is created lazily on first use. There is no `init()`
//! ceremony; an embedding application that wants to observe rebuild
//! requests reads the dirty flag via [`ContextState::dirty_flag`].

use crate::reactive::{DirtyFlag, ReactiveGraph, SharedReactiveGraph, Signal, SignalId, State};
use std::any::TypeId;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

/// Global context state instance
static CONTEXT_STATE: OnceLock<ContextState> = OnceLock::new();

/// Key identifying a signal in the keyed state system
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// Hash of the user-provided key
    key_hash: u64,
    /// Type of the signal value
    type_id: TypeId,
}

impl StateKey {
    /// Create a new StateKey from a hashable key and type
    pub fn new<T: 'static, K: Hash>(key: &K) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        key.hash(&mut hasher);
        Self {
            key_hash: hasher.finish(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Create a StateKey from a string key and type
    pub fn from_string<T: 'static>(key: &str) -> Self {
        Self::new::<T, _>(&key)
    }
}

/// Stores keyed signals across rebuilds
pub struct HookState {
    /// Keyed signals: key -> raw signal ID
    signals: HashMap<StateKey, u64>,
}

impl Default for HookState {
    fn default() -> Self {
        Self::new()
    }
}

impl HookState {
    /// Create a new HookState
    pub fn new() -> Self {
        Self {
            signals: HashMap::new(),
        }
    }

    /// Get an existing signal by key
    pub fn get(&self, key: &StateKey) -> Option<u64> {
        self.signals.get(key).copied()
    }

    /// Store a signal with the given key
    pub fn insert(&mut self, key: StateKey, signal_id: u64) {
        self.signals.insert(key, signal_id);
    }
}

/// Shared hook state
pub type SharedHookState = Arc<Mutex<HookState>>;

/// Process-wide keyed state singleton
pub struct ContextState {
    /// Reactive graph for signal storage
    reactive: SharedReactiveGraph,
    /// Hook state for keyed signal persistence
    hooks: SharedHookState,
    /// Dirty flag for requesting UI rebuilds
    dirty_flag: DirtyFlag,
}

impl ContextState {
    /// Get the global context state, creating it on first use
    pub fn get() -> &'static ContextState {
        CONTEXT_STATE.get_or_init(|| ContextState {
            reactive: Arc::new(Mutex::new(ReactiveGraph::new())),
            hooks: Arc::new(Mutex::new(HookState::new())),
            dirty_flag: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Create a persistent state value that survives across UI rebuilds
    ///
    /// Returns the existing signal for `(key, T)` if one was created before,
    /// otherwise creates a new signal seeded from `init`.
    pub fn use_state_keyed<T, F>(&self, key: &str, init: F) -> State<T>
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        let state_key = StateKey::from_string::<T>(key);
        let mut hooks = self.hooks.lock().unwrap();

        let signal = if let Some(raw_id) = hooks.get(&state_key) {
            Signal::from_id(SignalId::from_raw(raw_id))
        } else {
            let signal = self.reactive.lock().unwrap().create_signal(init());
            hooks.insert(state_key, signal.id().to_raw());
            tracing::debug!(key, "created keyed state");
            signal
        };

        State::new(
            signal,
            Arc::clone(&self.reactive),
            Arc::clone(&self.dirty_flag),
        )
    }

    /// Create a persistent signal that survives across UI rebuilds
    ///
    /// Like `use_state_keyed` but returns the bare signal handle.
    pub fn use_signal_keyed<T, F>(&self, key: &str, init: F) -> Signal<T>
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> T,
    {
        self.use_state_keyed(key, init).signal()
    }

    /// Get the shared reactive graph
    pub fn reactive(&self) -> &SharedReactiveGraph {
        &self.reactive
    }

    /// Get the dirty flag
    pub fn dirty_flag(&self) -> &DirtyFlag {
        &self.dirty_flag
    }

    /// Request a UI rebuild by raising the dirty flag
    pub fn request_rebuild(&self) {
        self.dirty_flag.store(true, Ordering::SeqCst);
    }

    /// Consume the dirty flag, returning whether a rebuild was requested
    pub fn take_dirty(&self) -> bool {
        self.dirty_flag.swap(false, Ordering::SeqCst)
    }
}

// =========================================================================
// Convenience Free Functions
// =========================================================================

/// Create a persistent state value that survives across UI rebuilds
///
/// Convenience wrapper around `ContextState::get().use_state_keyed()`.
pub fn use_state_keyed<T, F>(key: &str, init: F) -> State<T>
where
    T: Clone + Send + 'static,
    F: FnOnce() -> T,
{
    ContextState::get().use_state_keyed(key, init)
}

/// Create a persistent signal that survives across UI rebuilds
///
/// Convenience wrapper around `ContextState::get().use_signal_keyed()`.
pub fn use_signal_keyed<T, F>(key: &str, init: F) -> Signal<T>
where
    T: Clone + Send + 'static,
    F: FnOnce() -> T,
{
    ContextState::get().use_signal_keyed(key, init)
}

/// Request a UI rebuild
pub fn request_rebuild() {
    ContextState::get().request_rebuild();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_key() {
        let key1 = StateKey::from_string::<i32>("counter");
        let key2 = StateKey::from_string::<i32>("counter");
        let key3 = StateKey::from_string::<String>("counter");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3); // Different types
    }

    #[test]
    fn test_hook_state() {
        let mut hooks = HookState::new();
        let key = StateKey::from_string::<i32>("test");

        assert!(hooks.get(&key).is_none());

        hooks.insert(key.clone(), 42);
        assert_eq!(hooks.get(&key), Some(42));
    }

    #[test]
    fn test_keyed_state_survives_rebuild() {
        let ctx = ContextState::get();

        let first = ctx.use_state_keyed("ctx_test_filter", String::new);
        first.set("ba".to_string());

        // A rebuild re-runs the same call site with the same key and must
        // observe the earlier write, not the init value.
        let second = ctx.use_state_keyed("ctx_test_filter", String::new);
        assert_eq!(second.get(), "ba");
        assert_eq!(first.signal_id(), second.signal_id());
    }

    #[test]
    fn test_distinct_keys_get_distinct_signals() {
        let ctx = ContextState::get();

        let a = ctx.use_state_keyed("ctx_test_a", || 1i32);
        let b = ctx.use_state_keyed("ctx_test_b", || 2i32);

        assert_ne!(a.signal_id(), b.signal_id());
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
    }

    #[test]
    fn test_request_rebuild() {
        let ctx = ContextState::get();
        ctx.request_rebuild();
        assert!(ctx.take_dirty());
    }
}
