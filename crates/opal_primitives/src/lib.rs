//! Opal Primitives
//!
//! Boundary contracts between Opal components and the collaborators they
//! compose but do not implement:
//!
//! - [`anchored_overlay`]: the positioned-overlay surface (gesture
//!   vocabulary, anchor render slot, focus settings, host trait)
//! - [`filtered_list`]: the filterable list (item and row vocabulary,
//!   filter-change notifications, host trait)
//! - [`key`]: stable per-instance key generation for keyed component state
//!
//! A component wires these contracts together; an embedding application (or
//! a test double) provides the hosts.

pub mod anchored_overlay;
pub mod filtered_list;
pub mod key;

pub use anchored_overlay::{
    default_anchor_renderer, AnchorProps, AnchorRenderer, AnchorView, AnchoredOverlayHost,
    AnchoredOverlayProps, CloseCallback, FocusTrapSettings, FocusZoneSettings, Gesture,
    OpenCallback, OverlayOptions,
};
pub use filtered_list::{
    FilterChange, FilteredListHost, FilteredListProps, Item, ItemAction, ItemRole, ListItem,
    SelectionVariant, TextInputProps,
};
pub use key::InstanceKey;
