//! Registry of symbolic XForms event names.
//!
//! Every event carries one [`EventName`]. The name decides the default
//! propagation flags of the event through its [`Descriptor`]:
//!
//! | Name          | Bubbles | Cancelable |
//! |---------------|---------|------------|
//! | `xforms-hint` | yes     | yes        |
//! | `xforms-help` | yes     | yes        |
//!
//! Names are compared exactly, the way XML names are: `"XForms-Hint"` and
//! `" xforms-hint"` are both unknown.
//!
//! # Example
//!
//! ```rust
//! use xforms_events::EventName;
//!
//! let name: EventName = "xforms-hint".parse().unwrap();
//! assert_eq!(name, EventName::XformsHint);
//! assert!(name.descriptor().bubbles);
//! ```

use std::{fmt, str::FromStr};

use log::debug;

use crate::error::Error;

/// Default propagation flags attached to an event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    /// Whether the event propagates up through the ancestors of its target.
    pub bubbles: bool,

    /// Whether a listener may cancel the default action of the event.
    pub cancelable: bool,
}

/// A known XForms event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    /// `xforms-hint`: the hint of a form control should be presented.
    XformsHint,

    /// `xforms-help`: the help of a form control should be presented.
    XformsHelp,
}

impl EventName {
    /// Every name in the registry.
    pub const ALL: [EventName; 2] = [EventName::XformsHint, EventName::XformsHelp];

    /// Canonical symbolic name, as it appears in documents and listeners.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventName::XformsHint => "xforms-hint",
            EventName::XformsHelp => "xforms-help",
        }
    }

    /// Default flags for events carrying this name.
    #[inline]
    pub const fn descriptor(&self) -> Descriptor {
        match self {
            // Target: core form control, no context info.
            EventName::XformsHint | EventName::XformsHelp => Descriptor {
                bubbles: true,
                cancelable: true,
            },
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match EventName::ALL.iter().find(|name| name.as_str() == s) {
            Some(name) => Ok(*name),
            None => {
                debug!("rejected unknown event name {s:?}");
                Err(Error::UnknownEventName(s.to_owned()))
            }
        }
    }
}
