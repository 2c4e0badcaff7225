//! Provided-or-created state
//!
//! Components that accept an optional externally-controlled value resolve it
//! through [`ProvidedState`]: either the caller supplied the value (and its
//! own setter), or the component creates a keyed internal cell. The choice
//! is made once, at construction, and is fixed for the life of the
//! component instance.
//!
//! ```ignore
//! // Controlled: the caller's prop is authoritative, no shadow copy.
//! let filter = ProvidedState::resolve(Some("ba".to_string()), setter, key, String::new);
//!
//! // Uncontrolled: the component owns the value in keyed state.
//! let filter = ProvidedState::resolve(None, None, key, String::new);
//! ```

use crate::context_state::use_state_keyed;
use crate::reactive::State;
use std::sync::Arc;

/// Caller-owned write path for a provided value
pub type Setter<T> = Arc<dyn Fn(T) + Send + Sync>;

/// A value that is either caller-provided or component-created
///
/// In the `Provided` variant the component holds no copy of its own: `get`
/// returns the value captured from the caller's current props, and `set`
/// only forwards to the caller's setter. The displayed value changes only
/// when the caller re-renders the component with a new prop.
///
/// In the `Created` variant the component owns the value in a keyed signal
/// that persists across rebuilds.
pub enum ProvidedState<T> {
    /// Caller owns the value; writes are forwarded, never stored here
    Provided {
        value: T,
        setter: Option<Setter<T>>,
    },
    /// Component owns the value in keyed internal state
    Created { state: State<T> },
}

impl<T: Clone + Default + Send + 'static> ProvidedState<T> {
    /// Resolve the ownership strategy for one component instance
    ///
    /// `external` present selects `Provided`; absent selects `Created`,
    /// seeded from `init` the first time `key` is seen. Callers must not
    /// flip between presence and absence across the instance's lifetime.
    pub fn resolve<F>(
        external: Option<T>,
        external_setter: Option<Setter<T>>,
        key: &str,
        init: F,
    ) -> Self
    where
        F: FnOnce() -> T,
    {
        match external {
            Some(value) => ProvidedState::Provided {
                value,
                setter: external_setter,
            },
            None => ProvidedState::Created {
                state: use_state_keyed(key, init),
            },
        }
    }

    /// Whether the caller controls this value
    pub fn is_provided(&self) -> bool {
        matches!(self, ProvidedState::Provided { .. })
    }

    /// The current value
    pub fn get(&self) -> T {
        match self {
            ProvidedState::Provided { value, .. } => value.clone(),
            ProvidedState::Created { state } => state.get(),
        }
    }

    /// Write a new value through the resolved strategy
    ///
    /// Provided: forwards to the caller's setter (a no-op setter means the
    /// value simply does not change). Created: writes the internal cell and
    /// requests a rebuild.
    pub fn set(&self, value: T) {
        match self {
            ProvidedState::Provided { setter, .. } => {
                if let Some(setter) = setter {
                    setter(value);
                }
            }
            ProvidedState::Created { state } => state.set_rebuild(value),
        }
    }
}

impl<T: Clone> Clone for ProvidedState<T> {
    fn clone(&self) -> Self {
        match self {
            ProvidedState::Provided { value, setter } => ProvidedState::Provided {
                value: value.clone(),
                setter: setter.clone(),
            },
            ProvidedState::Created { state } => ProvidedState::Created {
                state: state.clone(),
            },
        }
    }
}
