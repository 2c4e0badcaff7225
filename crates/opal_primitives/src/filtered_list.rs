//! Filterable list boundary contract
//!
//! The list collaborator renders decorated items under a filter input,
//! reports filter edits, and invokes an item's activation handler on pick.
//! Its internals (row rendering, virtualization, the filtering algorithm
//! itself) are outside this workspace; components only produce the props
//! defined here.
//!
//! Hosts guarantee that filter-change notifications carry the new text plus
//! the originating raw event, and that a pick invokes exactly the picked
//! item's activation handler once per user gesture.

use opal_core::events::EventContext;
use std::sync::Arc;

/// A caller-supplied selectable record
///
/// Identity is whole-value equality: the same text (and description) is the
/// same item. There is no separate key field. Components never mutate
/// items; decoration annotates copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Display text
    pub text: String,
    /// Secondary line rendered by the list, if any
    pub description: Option<String>,
}

impl Item {
    /// Create an item with display text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: None,
        }
    }

    /// Attach a secondary description line
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Semantic role of a rendered list row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemRole {
    /// Plain list entry
    #[default]
    ListItem,
    /// Selectable option inside a listbox
    Option,
}

impl ItemRole {
    /// ARIA role string
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemRole::ListItem => "listitem",
            ItemRole::Option => "option",
        }
    }
}

/// Selection behavior tag handed to the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionVariant {
    /// At most one item selected at a time
    Single,
    /// Any number of items selected
    Multiple,
}

impl SelectionVariant {
    /// Stable name for list configuration and ARIA wiring
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionVariant::Single => "single",
            SelectionVariant::Multiple => "multiple",
        }
    }

    /// Whether this is the multiple-selection variant
    pub fn is_multiple(&self) -> bool {
        matches!(self, SelectionVariant::Multiple)
    }
}

/// Activation handler invoked by the list when a row is picked
pub type ItemAction = Arc<dyn Fn(&EventContext) + Send + Sync>;

/// A decorated, render-ready list row
#[derive(Clone)]
pub struct ListItem {
    /// Copy of the caller's item
    pub item: Item,
    /// Semantic role of the row
    pub role: ItemRole,
    /// Whether the row is currently selected
    pub selected: bool,
    /// Invoked on pick
    pub on_action: ItemAction,
}

impl std::fmt::Debug for ListItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListItem")
            .field("item", &self.item)
            .field("role", &self.role)
            .field("selected", &self.selected)
            .finish()
    }
}

/// Filter-change notification: new text plus the originating raw event
pub type FilterChange = Arc<dyn Fn(&str, &EventContext) + Send + Sync>;

/// Configuration the component extends onto the list's filter input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextInputProps {
    /// ARIA label for the input
    pub aria_label: Option<String>,
    /// Render the leading search visual
    pub leading_search_visual: bool,
}

/// Everything a filterable-list host needs from the component
#[derive(Clone)]
pub struct FilteredListProps {
    /// Decorated rows, in caller item order
    pub items: Vec<ListItem>,
    /// Current filter text
    pub filter_value: String,
    /// Invoked on every filter edit
    pub on_filter_change: FilterChange,
    /// Placeholder shown in the empty filter input
    pub placeholder_text: String,
    /// ARIA role of the list container
    pub role: &'static str,
    /// Whether the list advertises multi-selection
    pub aria_multiselectable: bool,
    /// Selection behavior tag
    pub selection_variant: SelectionVariant,
    /// Filter input configuration
    pub text_input: TextInputProps,
    /// Element id of the filter input, used as the initial focus target
    pub input_id: String,
}

impl std::fmt::Debug for FilteredListProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredListProps")
            .field("items", &self.items)
            .field("filter_value", &self.filter_value)
            .field("placeholder_text", &self.placeholder_text)
            .field("role", &self.role)
            .field("aria_multiselectable", &self.aria_multiselectable)
            .field("selection_variant", &self.selection_variant)
            .field("text_input", &self.text_input)
            .field("input_id", &self.input_id)
            .finish()
    }
}

/// The filterable-list collaborator
pub trait FilteredListHost {
    /// Mount or update the list with freshly wired props
    fn mount(&mut self, props: FilteredListProps);
}
