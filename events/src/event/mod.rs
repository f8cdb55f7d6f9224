//! XForms event records.
//!
//! This module provides [`XFormsEvent`], the record every XForms event is built
//! on, and the [`Event`] trait shared by all concrete event types.
//!
//! # Overview
//!
//! An event is an immutable value made of:
//! - **Name**: a symbolic [`EventName`] such as `xforms-hint`
//! - **Target**: the [`Target`] the event is raised on, shared through an `Arc`
//! - **Bubbles**: whether the event propagates up from its target
//! - **Cancelable**: whether a listener may cancel its default action
//!
//! Concrete event types ([`HintEvent`], [`HelpEvent`]) are thin wrappers whose
//! constructor fixes the name and flags, so only the target is chosen by the
//! caller. Events are built once per occurrence, handed to whatever dispatches
//! them, and dropped afterwards. Nothing in this crate delivers them.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use xforms_events::{Control, ControlKind, Event, EventName, HintEvent};
//!
//! let control = Arc::new(Control::new("email", ControlKind::Input).unwrap());
//! let event = HintEvent::new(control);
//!
//! assert_eq!(event.name(), EventName::XformsHint);
//! assert_eq!(event.target().effective_id(), "email");
//! assert!(event.bubbles() && event.cancelable());
//! ```

pub mod help;
pub mod hint;
pub mod name;
pub mod target;

use std::{fmt, sync::Arc};

use log::trace;

pub use help::HelpEvent;
pub use hint::HintEvent;
pub use name::{Descriptor, EventName};
pub use target::{Control, ControlKind, Target};

/// Trait shared by XForms event types.
///
/// Events must be:
/// - `'static`: No borrowed data
/// - `Send + Sync`: Safe to hand to another thread for dispatch
/// - `Clone`: Cheap, the target is reference counted
/// - `Debug`: For diagnostics and logging
pub trait Event: 'static + Send + Sync + Clone + fmt::Debug {
    /// The underlying event record.
    fn as_xforms_event(&self) -> &XFormsEvent;

    #[inline]
    fn name(&self) -> EventName {
        self.as_xforms_event().name()
    }

    #[inline]
    fn target(&self) -> &Arc<dyn Target> {
        self.as_xforms_event().target()
    }

    #[inline]
    fn bubbles(&self) -> bool {
        self.as_xforms_event().bubbles()
    }

    #[inline]
    fn cancelable(&self) -> bool {
        self.as_xforms_event().cancelable()
    }
}

/// The record every XForms event is made of.
#[derive(Clone)]
pub struct XFormsEvent {
    name: EventName,
    target: Arc<dyn Target>,
    bubbles: bool,
    cancelable: bool,
}

impl XFormsEvent {
    /// Creates an event with explicit flags.
    pub fn new(name: EventName, target: Arc<dyn Target>, bubbles: bool, cancelable: bool) -> Self {
        trace!(
            "{name} raised on {:?} (bubbles: {bubbles}, cancelable: {cancelable})",
            target.effective_id()
        );
        Self {
            name,
            target,
            bubbles,
            cancelable,
        }
    }

    /// Creates an event with the flags registered for `name`.
    pub fn with_defaults(name: EventName, target: Arc<dyn Target>) -> Self {
        let Descriptor {
            bubbles,
            cancelable,
        } = name.descriptor();
        Self::new(name, target, bubbles, cancelable)
    }

    #[inline]
    pub fn name(&self) -> EventName {
        self.name
    }

    #[inline]
    pub fn target(&self) -> &Arc<dyn Target> {
        &self.target
    }

    #[inline]
    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    #[inline]
    pub fn cancelable(&self) -> bool {
        self.cancelable
    }
}

impl Event for XFormsEvent {
    #[inline]
    fn as_xforms_event(&self) -> &XFormsEvent {
        self
    }
}

impl fmt::Debug for XFormsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XFormsEvent")
            .field("name", &self.name.as_str())
            .field("target", &self.target.effective_id())
            .field("bubbles", &self.bubbles)
            .field("cancelable", &self.cancelable)
            .finish()
    }
}

impl fmt::Display for XFormsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.name, self.target.effective_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(id: &str) -> Arc<dyn Target> {
        Arc::new(Control::new(id, ControlKind::Input).unwrap())
    }

    // ==================== Construction ====================

    #[test]
    fn new_keeps_explicit_flags() {
        let event = XFormsEvent::new(EventName::XformsHint, control("a"), false, true);

        assert_eq!(event.name(), EventName::XformsHint);
        assert!(!event.bubbles());
        assert!(event.cancelable());
    }

    #[test]
    fn with_defaults_uses_descriptor() {
        for name in EventName::ALL {
            let event = XFormsEvent::with_defaults(name, control("a"));

            assert_eq!(event.bubbles(), name.descriptor().bubbles);
            assert_eq!(event.cancelable(), name.descriptor().cancelable);
        }
    }

    #[test]
    fn target_is_shared_not_copied() {
        let target = control("shared");
        let event = XFormsEvent::with_defaults(EventName::XformsHelp, Arc::clone(&target));

        assert!(Arc::ptr_eq(event.target(), &target));
        assert_eq!(Arc::strong_count(&target), 2);
    }

    #[test]
    fn clone_shares_target() {
        let event = XFormsEvent::with_defaults(EventName::XformsHint, control("a"));
        let copy = event.clone();

        assert!(Arc::ptr_eq(event.target(), copy.target()));
        assert_eq!(copy.name(), event.name());
    }

    // ==================== Formatting ====================

    #[test]
    fn display_names_event_and_target() {
        let event = XFormsEvent::with_defaults(EventName::XformsHint, control("zip-code"));

        assert_eq!(event.to_string(), "xforms-hint on zip-code");
    }

    #[test]
    fn debug_shows_all_fields() {
        let event = XFormsEvent::new(EventName::XformsHelp, control("c"), true, false);

        assert_eq!(
            format!("{event:?}"),
            r#"XFormsEvent { name: "xforms-help", target: "c", bubbles: true, cancelable: false }"#
        );
    }

    // ==================== Threads ====================

    #[test]
    fn event_can_cross_threads() {
        let event = XFormsEvent::with_defaults(EventName::XformsHint, control("t"));

        let name = std::thread::spawn(move || event.name()).join().unwrap();

        assert_eq!(name, EventName::XformsHint);
    }
}
