//! The `xforms-hint` event.
//!
//! Raised on a core form control when its hint should be presented to the
//! user. The event bubbles, is cancelable, and carries no context info.

use std::sync::Arc;

use crate::event::{Event, EventName, Target, XFormsEvent};

/// Request to present the hint of a form control.
///
/// Only the target is chosen by the caller; name and flags are fixed.
///
/// ```rust
/// use std::sync::Arc;
///
/// use xforms_events::{Control, ControlKind, Event, HintEvent};
///
/// let control = Arc::new(Control::new("phone", ControlKind::Input).unwrap());
/// let event = HintEvent::new(control);
///
/// assert_eq!(event.name().as_str(), "xforms-hint");
/// ```
#[derive(Debug, Clone)]
pub struct HintEvent(XFormsEvent);

impl HintEvent {
    pub fn new(target: Arc<dyn Target>) -> Self {
        Self(XFormsEvent::new(EventName::XformsHint, target, true, true))
    }

    /// Releases the underlying record, e.g. to queue it with other events.
    #[inline]
    pub fn into_inner(self) -> XFormsEvent {
        self.0
    }
}

impl Event for HintEvent {
    #[inline]
    fn as_xforms_event(&self) -> &XFormsEvent {
        &self.0
    }
}

impl From<HintEvent> for XFormsEvent {
    fn from(event: HintEvent) -> Self {
        event.into_inner()
    }
}
