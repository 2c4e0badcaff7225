//! Stable unique key generation for component instances.
//!
//! Keyed internal state (filter text, generated element ids) needs a key
//! that is unique per component instance, including instances built in
//! loops or closures where `#[track_caller]` alone would collide.
//!
//! # Example
//!
//! ```ignore
//! let key = InstanceKey::new("quick_select");
//! let filter_key = key.derive("filter");   // "quick_select@src/app.rs:10:9#<uuid>_filter"
//!
//! // Deterministic key for tests or programmatic element access
//! let key = InstanceKey::explicit("sidebar-labels");
//! ```

use std::cell::OnceCell;
use std::panic::Location;
use uuid::Uuid;

/// Generates a stable unique key for one component instance.
///
/// The key combines a component-type prefix, the builder call site, and a
/// v4 UUID, and is generated lazily on first access then cached for the
/// builder's lifetime. The call-site portion exists for debugging; the UUID
/// carries the uniqueness.
pub struct InstanceKey {
    key: OnceCell<String>,
    prefix: &'static str,
    location: Option<&'static Location<'static>>,
}

impl InstanceKey {
    /// Create from the caller's source location with a fresh UUID.
    #[track_caller]
    pub fn new(prefix: &'static str) -> Self {
        Self {
            key: OnceCell::new(),
            prefix,
            location: Some(Location::caller()),
        }
    }

    /// Create with an explicit user-provided key.
    ///
    /// Use this for stable, predictable keys that do not change between
    /// rebuilds (tests, programmatic element access).
    pub fn explicit(key: impl Into<String>) -> Self {
        let instance = Self {
            key: OnceCell::new(),
            prefix: "",
            location: None,
        };
        let _ = instance.key.set(key.into());
        instance
    }

    /// Get or generate the unique key.
    pub fn get(&self) -> &str {
        self.key.get_or_init(|| {
            let loc = self
                .location
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_default();
            let key = format!("{}@{}#{}", self.prefix, loc, Uuid::new_v4().as_simple());
            tracing::trace!(key, "generated instance key");
            key
        })
    }

    /// Create a derived key for sub-state of this instance.
    ///
    /// ```ignore
    /// let key = InstanceKey::new("quick_select");
    /// let filter_key = key.derive("filter");
    /// let title_key = key.derive("title");
    /// ```
    pub fn derive(&self, suffix: &str) -> String {
        format!("{}_{}", self.get(), suffix)
    }
}

impl std::fmt::Debug for InstanceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InstanceKey({})", self.get())
    }
}

impl Clone for InstanceKey {
    fn clone(&self) -> Self {
        // A clone addresses the same instance state, so it keeps the key.
        Self::explicit(self.get())
    }
}
