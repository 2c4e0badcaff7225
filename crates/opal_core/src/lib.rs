//! Opal Core Runtime
//!
//! Foundational primitives for the Opal component library:
//!
//! - **Reactive Signals**: typed handles over a central value graph, with
//!   version counters for change detection
//! - **Keyed Component State**: per-instance state that survives UI rebuilds
//! - **Provided-or-Created State**: the controlled/uncontrolled resolution
//!   components use for optionally caller-owned values
//! - **Event Context**: interaction metadata with explicit consumed-event
//!   short-circuiting
//!
//! # Example
//!
//! ```rust
//! use opal_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//!
//! let count = graph.create_signal(0i32);
//! graph.set(count, 5);
//! assert_eq!(graph.get(count), Some(5));
//! ```

pub mod context_state;
pub mod events;
pub mod provided;
pub mod reactive;

pub use context_state::{
    request_rebuild, use_signal_keyed, use_state_keyed, ContextState, HookState, SharedHookState,
    StateKey,
};
pub use events::{event_types, EventContext, EventType};
pub use provided::{ProvidedState, Setter};
pub use reactive::{
    DirtyFlag, ReactiveGraph, SharedReactiveGraph, Signal, SignalId, State,
};
