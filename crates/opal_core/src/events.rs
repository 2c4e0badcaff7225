//! Event context for UI callbacks
//!
//! Components receive an [`EventContext`] describing the raw interaction
//! that triggered a callback. The context carries an explicit
//! "default prevented" flag: an inner handler that fully consumes a gesture
//! calls [`EventContext::prevent_default`], and outer handlers check
//! [`EventContext::default_prevented`] before acting.

use std::cell::Cell;

/// An event type tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EventType(pub u32);

/// Well-known event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = EventType(1);
    pub const POINTER_UP: EventType = EventType(2);
    pub const POINTER_ENTER: EventType = EventType(3);
    pub const POINTER_LEAVE: EventType = EventType(4);
    pub const KEY_DOWN: EventType = EventType(5);
    pub const KEY_UP: EventType = EventType(6);
    pub const TEXT_INPUT: EventType = EventType(7);
    pub const FOCUS: EventType = EventType(8);
    pub const BLUR: EventType = EventType(9);
}

/// Context passed to event callbacks
#[derive(Debug)]
pub struct EventContext {
    /// The type of event that occurred
    pub event_type: EventType,
    /// Mouse position at time of event (if applicable)
    pub mouse_x: f32,
    pub mouse_y: f32,
    /// Character for TEXT_INPUT events
    pub key_char: Option<char>,
    /// Key code for KEY_DOWN/KEY_UP events (platform-specific)
    pub key_code: u32,
    /// Whether shift modifier is held
    pub shift: bool,
    /// Whether ctrl modifier is held
    pub ctrl: bool,
    /// Whether alt modifier is held
    pub alt: bool,
    /// Whether meta modifier is held (Cmd on macOS, Win on Windows)
    pub meta: bool,
    /// Set once an inner handler has consumed the event
    default_prevented: Cell<bool>,
}

impl EventContext {
    /// Create a new event context
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            mouse_x: 0.0,
            mouse_y: 0.0,
            key_char: None,
            key_code: 0,
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
            default_prevented: Cell::new(false),
        }
    }

    /// Set mouse position
    pub fn with_mouse_pos(mut self, x: f32, y: f32) -> Self {
        self.mouse_x = x;
        self.mouse_y = y;
        self
    }

    /// Set key character (for TEXT_INPUT events)
    pub fn with_key_char(mut self, c: char) -> Self {
        self.key_char = Some(c);
        self
    }

    /// Set key code (for KEY_DOWN/KEY_UP events)
    pub fn with_key_code(mut self, code: u32) -> Self {
        self.key_code = code;
        self
    }

    /// Set modifier keys
    pub fn with_modifiers(mut self, shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        self.shift = shift;
        self.ctrl = ctrl;
        self.alt = alt;
        self.meta = meta;
        self
    }

    /// Mark the event as consumed by this handler
    ///
    /// Outer handlers observing the flag must not act on the event again.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Whether an inner handler already consumed the event
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
