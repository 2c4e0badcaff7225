//! Anchored overlay boundary contract
//!
//! The positioned-overlay collaborator (portal, placement, outside-click and
//! escape tracking) lives outside this workspace. This module defines the
//! narrow interface a component wires against: the gesture vocabulary for
//! open/close transitions, the anchor render slot, focus settings passed
//! through unchanged, and the full prop set a host consumes.
//!
//! Hosts guarantee they invoke `on_open` only for user-initiated anchor
//! gestures and `on_close` only for dismissal gestures, and that they never
//! touch selection or filter state. They also own nothing: the `open`
//! boolean in the props is authoritative, and a host must re-render from
//! whatever value the caller supplies next, whether or not a requested
//! transition was honored.

use std::sync::Arc;

/// Cause tag accompanying every open/close transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Pointer press on the anchor
    AnchorClick,
    /// Key press on the anchor
    AnchorKeyPress,
    /// Pointer press outside the open overlay
    ClickOutside,
    /// Escape pressed while the overlay is open
    Escape,
    /// An item pick closed the overlay (synthesized by the component,
    /// never reported by an overlay host)
    Selection,
}

impl Gesture {
    /// Whether this gesture requests an open transition
    pub fn opens(&self) -> bool {
        matches!(self, Gesture::AnchorClick | Gesture::AnchorKeyPress)
    }

    /// Whether this gesture requests a close transition
    pub fn closes(&self) -> bool {
        !self.opens()
    }

    /// Stable name for logs and host-side telemetry
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::AnchorClick => "anchor-click",
            Gesture::AnchorKeyPress => "anchor-key-press",
            Gesture::ClickOutside => "click-outside",
            Gesture::Escape => "escape",
            Gesture::Selection => "selection",
        }
    }
}

/// Callback invoked when a gesture requests opening the overlay
pub type OpenCallback = Arc<dyn Fn(Gesture) + Send + Sync>;

/// Callback invoked when a gesture requests closing the overlay
pub type CloseCallback = Arc<dyn Fn(Gesture) + Send + Sync>;

/// What a render-anchor function receives from the component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorProps {
    /// Visible label, derived from the current selection by the component
    pub children: Option<String>,
    /// Whether the overlay this anchor controls is open
    pub expanded: bool,
    /// The anchor controls a listbox popup
    pub has_popup: bool,
}

/// What a render-anchor function returns for the host to draw
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorView {
    /// Text shown inside the trigger control
    pub label: Option<String>,
    /// Show the trailing dropdown indicator
    pub trailing_indicator: bool,
}

/// Builds the visible trigger control from anchor props
pub type AnchorRenderer = Arc<dyn Fn(AnchorProps) -> AnchorView + Send + Sync>;

/// The default anchor: a button carrying the label and a dropdown indicator
pub fn default_anchor_renderer() -> AnchorRenderer {
    Arc::new(|props: AnchorProps| AnchorView {
        label: props.children,
        trailing_indicator: true,
    })
}

/// Which element receives focus when the overlay opens
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusTrapSettings {
    /// Element id to focus initially
    pub initial_focus: Option<String>,
}

/// Focus-zone configuration forwarded to the focus collaborator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusZoneSettings {
    /// Disable the overlay's own focus zone in favor of the content's
    pub disabled: bool,
}

/// Caller passthrough to the positioning collaborator
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayOptions {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// Everything an anchored-overlay host needs from the component
#[derive(Clone)]
pub struct AnchoredOverlayProps {
    /// Builds the trigger control; `None` means the caller renders and
    /// triggers the overlay entirely on its own
    pub render_anchor: Option<AnchorRenderer>,
    /// Element id of the anchor, for positioning and focus return
    pub anchor_id: String,
    /// Caller-owned open state, reflected verbatim
    pub open: bool,
    /// Invoked with the gesture that requested opening
    pub on_open: OpenCallback,
    /// Invoked with the gesture that requested closing
    pub on_close: CloseCallback,
    /// ARIA role of the overlay surface
    pub role: &'static str,
    /// Id of the element labelling the overlay
    pub labelled_by: Option<String>,
    /// Id of the element describing the overlay
    pub described_by: Option<String>,
    /// Initial-focus configuration for the focus-trap collaborator
    pub focus_trap: FocusTrapSettings,
    /// Focus-zone configuration, passed through unchanged
    pub focus_zone: FocusZoneSettings,
    /// Size passthrough from the caller
    pub options: OverlayOptions,
}

impl std::fmt::Debug for AnchoredOverlayProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnchoredOverlayProps")
            .field("render_anchor", &self.render_anchor.is_some())
            .field("anchor_id", &self.anchor_id)
            .field("open", &self.open)
            .field("role", &self.role)
            .field("labelled_by", &self.labelled_by)
            .field("described_by", &self.described_by)
            .field("focus_trap", &self.focus_trap)
            .field("focus_zone", &self.focus_zone)
            .field("options", &self.options)
            .finish()
    }
}

/// The positioned-overlay collaborator
pub trait AnchoredOverlayHost {
    /// Mount or update the overlay with freshly wired props
    fn mount(&mut self, props: AnchoredOverlayProps);
}
