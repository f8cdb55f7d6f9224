use std::sync::Arc;

use crate::event::{Event, EventName, Target, XFormsEvent};

/// `xforms-help`: request to present the help of a form control.
#[derive(Debug, Clone)]
pub struct HelpEvent(XFormsEvent);

impl HelpEvent {
    pub fn new(target: Arc<dyn Target>) -> Self {
        Self(XFormsEvent::new(EventName::XformsHelp, target, true, true))
    }

    #[inline]
    pub fn into_inner(self) -> XFormsEvent {
        self.0
    }
}

impl Event for HelpEvent {
    #[inline]
    fn as_xforms_event(&self) -> &XFormsEvent {
        &self.0
    }
}

impl From<HelpEvent> for XFormsEvent {
    fn from(event: HelpEvent) -> Self {
        event.into_inner()
    }
}
