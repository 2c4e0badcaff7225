//! Selection model for select-style components
//!
//! A selection is either a single optional item or an ordered sequence of
//! items. The two shapes carry different interaction semantics (replace vs
//! accumulate), so they are one tagged union instead of an ambiguous
//! runtime shape: every mode-dependent branch in a component dispatches on
//! the variant of the value it was given.
//!
//! A component instance must be driven with one variant for its whole
//! life. Swapping `Single` for `Multi` (or back) between rebuilds of the
//! same instance is unsupported.

use opal_primitives::filtered_list::{Item, SelectionVariant};

/// Current selection of a select-style component
///
/// All helpers are pure: they return new values and never mutate in place.
/// Membership is item value equality (see [`Item`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// At most one selected item
    Single(Option<Item>),
    /// Selected items in the order they were picked
    Multi(Vec<Item>),
}

impl Selection {
    /// An empty single-mode selection
    pub fn none() -> Self {
        Selection::Single(None)
    }

    /// A single-mode selection holding one item
    pub fn single(item: Item) -> Self {
        Selection::Single(Some(item))
    }

    /// A multi-mode selection from picked items, in pick order
    pub fn multi(items: impl IntoIterator<Item = Item>) -> Self {
        Selection::Multi(items.into_iter().collect())
    }

    /// Whether this selection operates in multi mode
    ///
    /// An empty sequence is still multi mode; an absent single item is
    /// still single mode.
    pub fn is_multi(&self) -> bool {
        matches!(self, Selection::Multi(_))
    }

    /// The selection behavior tag for list configuration
    pub fn variant(&self) -> SelectionVariant {
        if self.is_multi() {
            SelectionVariant::Multiple
        } else {
            SelectionVariant::Single
        }
    }

    /// Number of selected items
    pub fn len(&self) -> usize {
        match self {
            Selection::Single(selected) => usize::from(selected.is_some()),
            Selection::Multi(selected) => selected.len(),
        }
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `item` is part of the selection
    pub fn contains(&self, item: &Item) -> bool {
        match self {
            Selection::Single(selected) => selected.as_ref() == Some(item),
            Selection::Multi(selected) => selected.contains(item),
        }
    }

    /// The selection after toggling `item`
    ///
    /// Single mode: picking the selected item deselects it; picking any
    /// other item replaces the selection. Multi mode: an already-included
    /// item is removed, a new item is appended, and the relative order of
    /// the remaining items is preserved.
    pub fn toggled(&self, item: &Item) -> Selection {
        match self {
            Selection::Single(selected) => {
                if selected.as_ref() == Some(item) {
                    Selection::Single(None)
                } else {
                    Selection::Single(Some(item.clone()))
                }
            }
            Selection::Multi(selected) => {
                if selected.contains(item) {
                    Selection::Multi(selected.iter().filter(|s| *s != item).cloned().collect())
                } else {
                    let mut next = selected.clone();
                    next.push(item.clone());
                    Selection::Multi(next)
                }
            }
        }
    }

    /// Display label for the selection, without a placeholder fallback
    ///
    /// `None` when nothing is selected; otherwise the single item's text or
    /// the comma-and-space join of all selected texts in selection order.
    pub fn label(&self) -> Option<String> {
        match self {
            Selection::Single(selected) => selected.as_ref().map(|item| item.text.clone()),
            Selection::Multi(selected) => {
                if selected.is_empty() {
                    None
                } else {
                    Some(
                        selected
                            .iter()
                            .map(|item| item.text.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    )
                }
            }
        }
    }

    /// Display label for the selection, falling back to `placeholder`
    pub fn anchor_label(&self, placeholder: &str) -> String {
        self.label().unwrap_or_else(|| placeholder.to_string())
    }

    /// The selected items in selection order
    pub fn items(&self) -> Vec<&Item> {
        match self {
            Selection::Single(selected) => selected.iter().collect(),
            Selection::Multi(selected) => selected.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str) -> Item {
        Item::new(text)
    }

    #[test]
    fn test_variant_resolution() {
        assert!(!Selection::none().is_multi());
        assert!(!Selection::single(item("Foo")).is_multi());
        assert!(Selection::multi([]).is_multi());
        assert!(Selection::multi([item("Foo")]).is_multi());

        assert_eq!(Selection::none().variant(), SelectionVariant::Single);
        assert_eq!(Selection::multi([]).variant(), SelectionVariant::Multiple);
    }

    #[test]
    fn test_single_toggle_is_an_involution() {
        let start = Selection::none();
        let picked = start.toggled(&item("Foo"));
        assert_eq!(picked, Selection::single(item("Foo")));

        let back = picked.toggled(&item("Foo"));
        assert_eq!(back, start);
    }

    #[test]
    fn test_single_toggle_replaces_other_item() {
        let selection = Selection::single(item("Foo"));
        assert_eq!(
            selection.toggled(&item("Bar")),
            Selection::single(item("Bar"))
        );
    }

    #[test]
    fn test_multi_toggle_parity() {
        let mut selection = Selection::multi([]);

        // Odd toggles include the item, even toggles exclude it.
        for round in 0..3 {
            selection = selection.toggled(&item("Foo"));
            assert_eq!(selection.contains(&item("Foo")), round % 2 == 0);
        }
    }

    #[test]
    fn test_multi_toggle_appends_in_pick_order() {
        let selection = Selection::multi([])
            .toggled(&item("Baz"))
            .toggled(&item("Foo"));
        assert_eq!(selection, Selection::multi([item("Baz"), item("Foo")]));
    }

    #[test]
    fn test_multi_removal_preserves_relative_order() {
        let selection = Selection::multi([item("Foo"), item("Bar"), item("Baz")])
            .toggled(&item("Bar"));
        assert_eq!(selection, Selection::multi([item("Foo"), item("Baz")]));
    }

    #[test]
    fn test_anchor_label_uses_placeholder_verbatim_when_empty() {
        assert_eq!(Selection::none().anchor_label("Pick one"), "Pick one");
        assert_eq!(Selection::multi([]).anchor_label("Pick some"), "Pick some");
    }

    #[test]
    fn test_anchor_label_joins_in_selection_order() {
        let selection = Selection::multi([item("Foo"), item("Bar")]);
        assert_eq!(selection.anchor_label("unused"), "Foo, Bar");

        let single = Selection::single(item("Baz"));
        assert_eq!(single.anchor_label("unused"), "Baz");
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(Selection::none().is_empty());
        assert!(Selection::multi([]).is_empty());
        assert_eq!(Selection::single(item("Foo")).len(), 1);
        assert_eq!(Selection::multi([item("Foo"), item("Bar")]).len(), 2);
    }
}
