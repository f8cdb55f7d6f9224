//! XForms UI event records.
//!
//! See [`event`] for the event types and the [`Event`] trait they share.

pub mod error;
pub mod event;

pub use error::{Error, Result};
pub use event::{Control, ControlKind, Event, EventName, HelpEvent, HintEvent, Target, XFormsEvent};
