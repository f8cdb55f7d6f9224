//! Event targets.
//!
//! Anything an event can be raised on implements [`Target`]. Events hold their
//! target behind an `Arc`, so the same control can be the target of many
//! events at once without being copied.

use std::fmt;

use log::debug;

use crate::error::{Error, Result};

/// Capability of being the target of an XForms event.
pub trait Target: Send + Sync + fmt::Debug {
    /// The id identifying this target within its document.
    fn effective_id(&self) -> &str;
}

/// The XForms core form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Input,
    Secret,
    Textarea,
    Output,
    Upload,
    Range,
    Trigger,
    Submit,
    Select,
    Select1,
}

impl ControlKind {
    /// Element local name of the control.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ControlKind::Input => "input",
            ControlKind::Secret => "secret",
            ControlKind::Textarea => "textarea",
            ControlKind::Output => "output",
            ControlKind::Upload => "upload",
            ControlKind::Range => "range",
            ControlKind::Trigger => "trigger",
            ControlKind::Submit => "submit",
            ControlKind::Select => "select",
            ControlKind::Select1 => "select1",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a core form control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Control {
    effective_id: String,
    kind: ControlKind,
}

impl Control {
    /// Creates a control handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyEffectiveId`] if `effective_id` is empty.
    pub fn new(effective_id: impl Into<String>, kind: ControlKind) -> Result<Self> {
        let effective_id = effective_id.into();
        if effective_id.is_empty() {
            debug!("rejected {kind} control with an empty effective id");
            return Err(Error::EmptyEffectiveId);
        }
        Ok(Self { effective_id, kind })
    }

    #[inline]
    pub fn effective_id(&self) -> &str {
        &self.effective_id
    }

    #[inline]
    pub fn kind(&self) -> ControlKind {
        self.kind
    }
}

impl Target for Control {
    fn effective_id(&self) -> &str {
        &self.effective_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_id_and_kind() {
        let control = Control::new("first-name", ControlKind::Input).unwrap();

        assert_eq!(control.effective_id(), "first-name");
        assert_eq!(control.kind(), ControlKind::Input);
    }

    #[test]
    fn new_rejects_empty_id() {
        assert_eq!(
            Control::new("", ControlKind::Select1),
            Err(Error::EmptyEffectiveId)
        );
    }

    #[test]
    fn target_reports_effective_id() {
        let control = Control::new("repeat-1·2", ControlKind::Output).unwrap();
        let target: &dyn Target = &control;

        assert_eq!(target.effective_id(), "repeat-1·2");
    }

    #[test]
    fn kind_uses_element_names() {
        assert_eq!(ControlKind::Select1.to_string(), "select1");
        assert_eq!(ControlKind::Textarea.as_str(), "textarea");
    }
}
