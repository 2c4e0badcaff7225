//! # Opal Component Library (opal_ui)
//!
//! Composite, accessible components built on `opal_primitives` contracts.
//!
//! ## Philosophy
//!
//! - **Runtime**: `opal_core` provides reactive state and event context
//! - **Primitives**: `opal_primitives` defines the boundary contracts for
//!   the overlay, list, and focus collaborators
//! - **Components**: `opal_ui` wires those contracts into complete widgets
//!
//! A component here owns interaction semantics only. It produces fully
//! wired props for its collaborators; positioning, rendering, filtering
//! algorithms, and focus mechanics live in the hosts that consume them.
//!
//! ## Example
//!
//! ```ignore
//! use opal_ui::prelude::*;
//!
//! let selected = Selection::multi([]);
//!
//! quick_select(&selected)
//!     .items(vec![Item::new("Foo"), Item::new("Bar")])
//!     .placeholder("Select labels")
//!     .open(open)
//!     .on_open_change(|next, gesture| { /* store `next` */ })
//!     .on_selected_change(|selection| { /* store the new selection */ })
//!     .mount(&mut overlay_host, &mut list_host);
//! ```

pub mod components;
pub mod selection;

pub use components::*;
pub use selection::Selection;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::components::quick_select::{
        quick_select, AnchorSlot, PanelHeader, QuickSelect, QuickSelectBuilder, QuickSelectView,
    };
    pub use crate::selection::Selection;
    // Re-export the boundary vocabulary components are configured with
    pub use opal_primitives::anchored_overlay::{
        AnchorProps, AnchorView, AnchoredOverlayHost, Gesture, OverlayOptions,
    };
    pub use opal_primitives::filtered_list::{FilteredListHost, Item, SelectionVariant};
}
