//! QuickSelect component - filterable item selection in an anchored overlay
//!
//! Composes the anchored-overlay and filterable-list collaborators into a
//! single picker: an anchor button opens an overlay containing a heading
//! and a filterable option list. Single and multi selection share one
//! component; the mode is resolved from the variant of the supplied
//! [`Selection`].
//!
//! Open state and selection are caller-owned: the component only requests
//! transitions through `on_open_change` and reports new selections through
//! `on_selected_change`. The rendered open state is always the caller's
//! boolean, so a caller may ignore a requested transition (for example to
//! keep the panel open across picks).
//!
//! # Example
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

use std::cell::OnceCell;
use std::sync::Arc;

use opal_core::events::EventContext;
use opal_core::provided::ProvidedState;
use opal_primitives::anchored_overlay::{
    default_anchor_renderer, AnchorProps, AnchorRenderer, AnchorView, AnchoredOverlayHost,
    AnchoredOverlayProps, CloseCallback, FocusTrapSettings, FocusZoneSettings, Gesture,
    OpenCallback, OverlayOptions,
};
use opal_primitives::filtered_list::{
    FilterChange, FilteredListHost, FilteredListProps, Item, ItemAction, ItemRole, ListItem,
    SelectionVariant, TextInputProps,
};
use opal_primitives::key::InstanceKey;

use crate::selection::Selection;

/// Default placeholder for the filter input
const DEFAULT_PLACEHOLDER_TEXT: &str = "Filter items";

/// Notified with the new selection after a pick
pub type SelectionCallback = Arc<dyn Fn(&Selection) + Send + Sync>;

/// Notified with the requested open state and the gesture that caused it
pub type OpenChangeCallback = Arc<dyn Fn(bool, Gesture) + Send + Sync>;

/// Notified with new filter text and the raw event that produced it
pub type FilterChangeCallback = Arc<dyn Fn(&str, &EventContext) + Send + Sync>;

/// How the anchor is rendered
#[derive(Clone, Default)]
pub enum AnchorSlot {
    /// Default button anchor with the selection label and dropdown indicator
    #[default]
    Default,
    /// Caller-supplied renderer, still fed the selection label
    Custom(AnchorRenderer),
    /// No anchor; the caller renders and triggers the overlay itself
    None,
}

/// Header region of the panel: title plus optional description
#[derive(Clone, Debug, PartialEq)]
pub struct PanelHeader {
    pub title: String,
    pub title_id: String,
    pub description: Option<String>,
    pub description_id: Option<String>,
}

/// Fully wired collaborator props for one render of the component
#[derive(Clone)]
pub struct QuickSelectView {
    /// Props for the anchored-overlay collaborator
    pub overlay: AnchoredOverlayProps,
    /// Header content rendered inside the overlay, above the list
    pub header: PanelHeader,
    /// Props for the filterable-list collaborator
    pub list: FilteredListProps,
}

impl QuickSelectView {
    /// Hand the wired props to the two collaborators
    pub fn mount(
        &self,
        overlay_host: &mut dyn AnchoredOverlayHost,
        list_host: &mut dyn FilteredListHost,
    ) {
        overlay_host.mount(self.overlay.clone());
        list_host.mount(self.list.clone());
    }
}

/// Internal configuration for building a QuickSelect
#[derive(Clone)]
struct QuickSelectConfig {
    selected: Selection,
    on_selected_change: Option<SelectionCallback>,
    items: Vec<Item>,
    open: bool,
    on_open_change: OpenChangeCallback,
    title: Option<String>,
    description: Option<String>,
    placeholder: Option<String>,
    placeholder_text: String,
    input_label: Option<String>,
    filter_value: Option<String>,
    on_filter_change: Option<FilterChangeCallback>,
    anchor: AnchorSlot,
    overlay: OverlayOptions,
}

impl QuickSelectConfig {
    fn new(selected: Selection) -> Self {
        Self {
            selected,
            on_selected_change: None,
            items: Vec::new(),
            open: false,
            on_open_change: Arc::new(|_, _| {}),
            title: None,
            description: None,
            placeholder: None,
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
            input_label: None,
            filter_value: None,
            on_filter_change: None,
            anchor: AnchorSlot::Default,
            overlay: OverlayOptions::default(),
        }
    }
}

/// QuickSelect component
///
/// Holds the wired view for one builder instance. Use [`quick_select`] to
/// construct one.
pub struct QuickSelect {
    view: QuickSelectView,
}

impl QuickSelect {
    /// Create from a full configuration
    fn from_config(key: &InstanceKey, config: QuickSelectConfig) -> Self {
        let variant = config.selected.variant();

        // Defaults are computed after the variant is resolved.
        let title = config.title.clone().unwrap_or_else(|| {
            match variant {
                SelectionVariant::Multiple => "Select items",
                SelectionVariant::Single => "Select an item",
            }
            .to_string()
        });
        let title_id = key.derive("title");
        let description_id = config
            .description
            .as_ref()
            .map(|_| key.derive("description"));

        // Filter text: caller-provided when the prop is present, otherwise
        // a keyed internal cell. Resolved once per instance.
        let filter = ProvidedState::resolve(
            config.filter_value.clone(),
            None,
            &key.derive("filter"),
            String::new,
        );

        let on_filter_change: FilterChange = {
            let external = config.on_filter_change.clone();
            let filter = filter.clone();
            Arc::new(move |value: &str, event: &EventContext| {
                if let Some(notify) = &external {
                    notify(value, event);
                }
                filter.set(value.to_string());
            })
        };

        // Open/close relays. Pure forwarding: the caller's callback is the
        // sole authority over the open boolean, and the rendered open state
        // below is the caller's value verbatim.
        let on_open: OpenCallback = {
            let notify = config.on_open_change.clone();
            Arc::new(move |gesture: Gesture| {
                tracing::debug!(gesture = gesture.as_str(), "open requested");
                notify(true, gesture);
            })
        };
        let on_close: CloseCallback = {
            let notify = config.on_open_change.clone();
            Arc::new(move |gesture: Gesture| {
                tracing::debug!(gesture = gesture.as_str(), "close requested");
                notify(false, gesture);
            })
        };

        let items = decorate_items(&config);

        let render_anchor = resolve_anchor(&config);

        let input_id = key.derive("filter-input");
        let input_label = config
            .input_label
            .clone()
            .unwrap_or_else(|| config.placeholder_text.clone());

        let list = FilteredListProps {
            items,
            filter_value: filter.get(),
            on_filter_change,
            placeholder_text: config.placeholder_text.clone(),
            role: "listbox",
            aria_multiselectable: variant.is_multiple(),
            selection_variant: variant,
            text_input: TextInputProps {
                aria_label: Some(input_label),
                leading_search_visual: true,
            },
            input_id: input_id.clone(),
        };

        let overlay = AnchoredOverlayProps {
            render_anchor,
            anchor_id: key.derive("anchor"),
            open: config.open,
            on_open,
            on_close,
            role: "none",
            labelled_by: Some(title_id.clone()),
            described_by: description_id.clone(),
            focus_trap: FocusTrapSettings {
                initial_focus: Some(input_id),
            },
            // Let the list handle its own focus zone
            focus_zone: FocusZoneSettings { disabled: true },
            options: config.overlay,
        };

        let header = PanelHeader {
            title,
            title_id,
            description: config.description,
            description_id,
        };

        Self {
            view: QuickSelectView {
                overlay,
                header,
                list,
            },
        }
    }

    /// The wired collaborator props
    pub fn view(&self) -> &QuickSelectView {
        &self.view
    }
}

/// Annotate caller items with role, selection state, and activation handler
fn decorate_items(config: &QuickSelectConfig) -> Vec<ListItem> {
    config
        .items
        .iter()
        .map(|item| {
            let selected = config.selected.contains(item);
            let on_action: ItemAction = {
                let item = item.clone();
                let current = config.selected.clone();
                let notify_selection = config.on_selected_change.clone();
                let notify_open = config.on_open_change.clone();
                Arc::new(move |event: &EventContext| {
                    if event.default_prevented() {
                        return;
                    }
                    let next = current.toggled(&item);
                    // Report the new selection first, then request the
                    // close carrying the selection gesture.
                    if let Some(notify) = &notify_selection {
                        notify(&next);
                    }
                    notify_open(false, Gesture::Selection);
                })
            };
            ListItem {
                item: item.clone(),
                role: ItemRole::Option,
                selected,
                on_action,
            }
        })
        .collect()
}

/// Resolve the anchor slot into a renderer fed the selection label
fn resolve_anchor(config: &QuickSelectConfig) -> Option<AnchorRenderer> {
    let inner = match &config.anchor {
        AnchorSlot::None => return None,
        AnchorSlot::Custom(renderer) => renderer.clone(),
        AnchorSlot::Default => default_anchor_renderer(),
    };

    let label = config.selected.label();
    let placeholder = config.placeholder.clone();
    Some(Arc::new(move |mut props: AnchorProps| {
        props.children = label.clone().or_else(|| placeholder.clone());
        inner(props)
    }))
}

/// Builder for creating QuickSelect components with a fluent API
pub struct QuickSelectBuilder {
    key: InstanceKey,
    config: QuickSelectConfig,
    /// Cached built component - built lazily on first access
    built: OnceCell<QuickSelect>,
}

impl QuickSelectBuilder {
    /// Create a new builder from the caller's current selection
    ///
    /// Uses `#[track_caller]` to generate a unique instance key based on
    /// the call site.
    #[track_caller]
    pub fn new(selected: &Selection) -> Self {
        Self {
            key: InstanceKey::new("quick_select"),
            config: QuickSelectConfig::new(selected.clone()),
            built: OnceCell::new(),
        }
    }

    /// Create a builder with an explicit key
    ///
    /// Keyed internal state (the uncontrolled filter text) persists across
    /// rebuilds only when the key is stable, so callers that rebuild every
    /// frame should prefer this constructor.
    pub fn with_key(key: impl Into<String>, selected: &Selection) -> Self {
        Self {
            key: InstanceKey::explicit(key),
            config: QuickSelectConfig::new(selected.clone()),
            built: OnceCell::new(),
        }
    }

    /// Get or build the inner QuickSelect
    fn get_or_build(&self) -> &QuickSelect {
        self.built
            .get_or_init(|| QuickSelect::from_config(&self.key, self.config.clone()))
    }

    /// Set the selectable items
    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.config.items = items.into_iter().collect();
        self
    }

    /// Add a single selectable item
    pub fn item(mut self, item: Item) -> Self {
        self.config.items.push(item);
        self
    }

    /// Set the selection-change callback
    pub fn on_selected_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Selection) + Send + Sync + 'static,
    {
        self.config.on_selected_change = Some(Arc::new(callback));
        self
    }

    /// Set the caller-owned open state reflected by the overlay
    pub fn open(mut self, open: bool) -> Self {
        self.config.open = open;
        self
    }

    /// Set the open-transition callback
    pub fn on_open_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool, Gesture) + Send + Sync + 'static,
    {
        self.config.on_open_change = Arc::new(callback);
        self
    }

    /// Set the panel title (defaults to a variant-dependent string)
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Set the panel description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    /// Set the anchor placeholder shown while nothing is selected
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = Some(placeholder.into());
        self
    }

    /// Set the filter input placeholder
    pub fn placeholder_text(mut self, placeholder_text: impl Into<String>) -> Self {
        self.config.placeholder_text = placeholder_text.into();
        self
    }

    /// Set the filter input ARIA label (defaults to the input placeholder)
    pub fn input_label(mut self, input_label: impl Into<String>) -> Self {
        self.config.input_label = Some(input_label.into());
        self
    }

    /// Supply the filter text, making the filter caller-controlled
    pub fn filter_value(mut self, filter_value: impl Into<String>) -> Self {
        self.config.filter_value = Some(filter_value.into());
        self
    }

    /// Set the filter-change callback
    pub fn on_filter_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &EventContext) + Send + Sync + 'static,
    {
        self.config.on_filter_change = Some(Arc::new(callback));
        self
    }

    /// Replace the default anchor renderer
    pub fn render_anchor<F>(mut self, renderer: F) -> Self
    where
        F: Fn(AnchorProps) -> AnchorView + Send + Sync + 'static,
    {
        self.config.anchor = AnchorSlot::Custom(Arc::new(renderer));
        self
    }

    /// Render no anchor; the caller owns the trigger entirely
    pub fn without_anchor(mut self) -> Self {
        self.config.anchor = AnchorSlot::None;
        self
    }

    /// Pass size options through to the overlay collaborator
    pub fn overlay(mut self, options: OverlayOptions) -> Self {
        self.config.overlay = options;
        self
    }

    /// The wired collaborator props
    pub fn view(&self) -> &QuickSelectView {
        self.get_or_build().view()
    }

    /// Build and hand the wired props to the two collaborators
    pub fn mount(
        &self,
        overlay_host: &mut dyn AnchoredOverlayHost,
        list_host: &mut dyn FilteredListHost,
    ) {
        self.view().mount(overlay_host, list_host);
    }
}

/// Create a quick select from the caller's current selection
///
/// The selection's variant decides single vs multiple behavior for the
/// life of the instance.
///
/// # Example
///
/// ```ignore
/// use opal_ui::prelude::*;
///
/// quick_select(&Selection::multi([]))
///     .items(vec![Item::new("Foo"), Item::new("Bar")])
///     .on_selected_change(|selection| { /* store it */ })
///     .on_open_change(|next, gesture| { /* store `next` */ })
/// ```
#[track_caller]
pub fn quick_select(selected: &Selection) -> QuickSelectBuilder {
    QuickSelectBuilder::new(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opal_core::events::event_types;
    use std::sync::Mutex;

    fn items() -> Vec<Item> {
        vec![
            Item::new("Foo"),
            Item::new("Bar"),
            Item::new("Baz"),
            Item::new("Bon"),
        ]
    }

    fn pick_event() -> EventContext {
        EventContext::new(event_types::POINTER_UP)
    }

    #[test]
    fn test_default_title_follows_variant() {
        let single = quick_select(&Selection::none());
        assert_eq!(single.view().header.title, "Select an item");

        let multi = quick_select(&Selection::multi([]));
        assert_eq!(multi.view().header.title, "Select items");

        let custom = quick_select(&Selection::none()).title("Labels");
        assert_eq!(custom.view().header.title, "Labels");
    }

    #[test]
    fn test_aria_wiring_follows_variant() {
        let single = quick_select(&Selection::none()).items(items());
        let view = single.view();
        assert_eq!(view.list.role, "listbox");
        assert!(!view.list.aria_multiselectable);
        assert_eq!(view.list.selection_variant, SelectionVariant::Single);

        let multi = quick_select(&Selection::multi([])).items(items());
        let view = multi.view();
        assert!(view.list.aria_multiselectable);
        assert_eq!(view.list.selection_variant, SelectionVariant::Multiple);
    }

    #[test]
    fn test_overlay_header_references() {
        let widget = QuickSelectBuilder::with_key("qs-header", &Selection::none())
            .description("Pick something");
        let view = widget.view();

        assert_eq!(view.overlay.role, "none");
        assert_eq!(view.overlay.labelled_by.as_deref(), Some("qs-header_title"));
        assert_eq!(
            view.overlay.described_by.as_deref(),
            Some("qs-header_description")
        );
        assert_eq!(
            view.overlay.focus_trap.initial_focus.as_deref(),
            Some("qs-header_filter-input")
        );
        assert!(view.overlay.focus_zone.disabled);
    }

    #[test]
    fn test_no_description_no_described_by() {
        let widget = quick_select(&Selection::none());
        let view = widget.view();
        assert!(view.header.description.is_none());
        assert!(view.overlay.described_by.is_none());
    }

    #[test]
    fn test_decoration_marks_selected_items() {
        let selected = Selection::multi([Item::new("Bar"), Item::new("Bon")]);
        let widget = quick_select(&selected).items(items());
        let rows = &widget.view().list.items;

        assert_eq!(rows.len(), 4);
        let flags: Vec<bool> = rows.iter().map(|row| row.selected).collect();
        assert_eq!(flags, vec![false, true, false, true]);
        assert!(rows.iter().all(|row| row.role == ItemRole::Option));
    }

    #[test]
    fn test_decoration_empty_items() {
        let widget = quick_select(&Selection::none());
        assert!(widget.view().list.items.is_empty());
    }

    #[test]
    fn test_pick_notifies_selection_then_close() {
        let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let selection_log = Arc::clone(&log);
        let open_log = Arc::clone(&log);
        let widget = quick_select(&Selection::multi([]))
            .items(items())
            .on_selected_change(move |selection: &Selection| {
                selection_log
                    .lock()
                    .unwrap()
                    .push(format!("selected:{}", selection.anchor_label("")));
            })
            .on_open_change(move |next, gesture| {
                open_log
                    .lock()
                    .unwrap()
                    .push(format!("open:{}:{}", next, gesture.as_str()));
            });

        let view = widget.view();
        (view.list.items[1].on_action)(&pick_event());

        let events = log.lock().unwrap();
        assert_eq!(
            *events,
            vec!["selected:Bar".to_string(), "open:false:selection".to_string()]
        );
    }

    #[test]
    fn test_single_pick_of_selected_item_deselects() {
        let delivered: Arc<Mutex<Option<Selection>>> = Arc::new(Mutex::new(None));

        let sink = Arc::clone(&delivered);
        let widget = quick_select(&Selection::single(Item::new("Foo")))
            .items(items())
            .on_selected_change(move |selection: &Selection| {
                *sink.lock().unwrap() = Some(selection.clone());
            });

        (widget.view().list.items[0].on_action)(&pick_event());

        assert_eq!(*delivered.lock().unwrap(), Some(Selection::none()));
    }

    #[test]
    fn test_consumed_event_short_circuits_pick() {
        let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let selection_log = Arc::clone(&log);
        let open_log = Arc::clone(&log);
        let widget = quick_select(&Selection::multi([]))
            .items(items())
            .on_selected_change(move |_: &Selection| {
                selection_log.lock().unwrap().push("selected".to_string());
            })
            .on_open_change(move |_, _| {
                open_log.lock().unwrap().push("open".to_string());
            });

        let event = pick_event();
        event.prevent_default();
        (widget.view().list.items[0].on_action)(&event);

        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_open_close_relays_forward_verbatim() {
        let log: Arc<Mutex<Vec<(bool, Gesture)>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&log);
        let widget = quick_select(&Selection::none())
            .open(false)
            .on_open_change(move |next, gesture| {
                sink.lock().unwrap().push((next, gesture));
            });

        let view = widget.view();
        assert!(!view.overlay.open);

        (view.overlay.on_open)(Gesture::AnchorKeyPress);
        (view.overlay.on_close)(Gesture::ClickOutside);
        (view.overlay.on_close)(Gesture::Escape);

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                (true, Gesture::AnchorKeyPress),
                (false, Gesture::ClickOutside),
                (false, Gesture::Escape),
            ]
        );
    }

    #[test]
    fn test_rendered_open_state_is_caller_owned() {
        // The caller's callback chose not to flip the boolean; the rendered
        // state keeps reflecting the caller's value.
        let widget = quick_select(&Selection::none()).open(true).on_open_change(|_, _| {});
        assert!(widget.view().overlay.open);

        let widget = quick_select(&Selection::none()).open(false).on_open_change(|_, _| {});
        assert!(!widget.view().overlay.open);
    }

    #[test]
    fn test_anchor_label_from_selection() {
        let widget = quick_select(&Selection::multi([Item::new("Foo"), Item::new("Bar")]))
            .placeholder("Select Items");
        let render = widget.view().overlay.render_anchor.clone().unwrap();
        let view = render(AnchorProps::default());
        assert_eq!(view.label.as_deref(), Some("Foo, Bar"));
        assert!(view.trailing_indicator);
    }

    #[test]
    fn test_anchor_falls_back_to_placeholder() {
        let widget = quick_select(&Selection::multi([])).placeholder("Select Items");
        let render = widget.view().overlay.render_anchor.clone().unwrap();
        let view = render(AnchorProps::default());
        assert_eq!(view.label.as_deref(), Some("Select Items"));
    }

    #[test]
    fn test_custom_anchor_renderer_receives_label() {
        let widget = quick_select(&Selection::single(Item::new("Baz")))
            .render_anchor(|props| AnchorView {
                label: props.children.map(|text| format!("Label: {text}")),
                trailing_indicator: false,
            });
        let render = widget.view().overlay.render_anchor.clone().unwrap();
        let view = render(AnchorProps::default());
        assert_eq!(view.label.as_deref(), Some("Label: Baz"));
        assert!(!view.trailing_indicator);
    }

    #[test]
    fn test_without_anchor_renders_none() {
        let widget = quick_select(&Selection::none()).without_anchor();
        assert!(widget.view().overlay.render_anchor.is_none());
    }

    #[test]
    fn test_controlled_filter_reflects_caller_value_only() {
        let received: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&received);
        let widget = quick_select(&Selection::none())
            .filter_value("abc")
            .on_filter_change(move |value, _| sink.lock().unwrap().push(value.to_string()));

        let view = widget.view();
        assert_eq!(view.list.filter_value, "abc");

        // Typing notifies the caller, but with no caller state update the
        // next render still shows the prop value: no shadow copy.
        (view.list.on_filter_change)("xyz", &EventContext::new(event_types::TEXT_INPUT));
        assert_eq!(*received.lock().unwrap(), vec!["xyz".to_string()]);

        let rerendered = quick_select(&Selection::none()).filter_value("abc");
        assert_eq!(rerendered.view().list.filter_value, "abc");
    }

    #[test]
    fn test_uncontrolled_filter_owned_by_widget() {
        let widget = QuickSelectBuilder::with_key("qs-uncontrolled-filter", &Selection::none());
        assert_eq!(widget.view().list.filter_value, "");

        (widget.view().list.on_filter_change)("ba", &EventContext::new(event_types::TEXT_INPUT));

        // A rebuild with the same key reattaches to the widget-owned cell.
        let rerendered =
            QuickSelectBuilder::with_key("qs-uncontrolled-filter", &Selection::none());
        assert_eq!(rerendered.view().list.filter_value, "ba");
    }

    #[test]
    fn test_input_label_defaults_to_placeholder_text() {
        let widget = quick_select(&Selection::none());
        let view = widget.view();
        assert_eq!(view.list.placeholder_text, "Filter items");
        assert_eq!(view.list.text_input.aria_label.as_deref(), Some("Filter items"));
        assert!(view.list.text_input.leading_search_visual);

        let widget = quick_select(&Selection::none())
            .placeholder_text("Filter labels")
            .input_label("Search labels");
        let view = widget.view();
        assert_eq!(view.list.placeholder_text, "Filter labels");
        assert_eq!(
            view.list.text_input.aria_label.as_deref(),
            Some("Search labels")
        );
    }

    #[test]
    fn test_overlay_options_pass_through() {
        let widget = quick_select(&Selection::none()).overlay(OverlayOptions {
            width: Some(320.0),
            height: None,
        });
        assert_eq!(widget.view().overlay.options.width, Some(320.0));
        assert_eq!(widget.view().overlay.options.height, None);
    }

    #[test]
    fn test_view_is_cached_per_builder() {
        let widget = quick_select(&Selection::multi([Item::new("Foo")])).items(items());
        let first = widget.view() as *const QuickSelectView;
        let second = widget.view() as *const QuickSelectView;
        assert_eq!(first, second);
    }
}
