//! Composite components built on opal_primitives contracts
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `quick_select(&selected)`)
//! - Internal config struct consumed by `from_config`
//! - A wired view of collaborator props, cached per builder instance

pub mod quick_select;

pub use quick_select::{
    quick_select, AnchorSlot, FilterChangeCallback, OpenChangeCallback, PanelHeader, QuickSelect,
    QuickSelectBuilder, QuickSelectView, SelectionCallback,
};
