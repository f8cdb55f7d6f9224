/// Errors raised while naming events or building targets.
///
/// Constructing an event never fails; only the inputs to it can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown XForms event name: {0:?}")]
    UnknownEventName(String),

    #[error("form control effective id must not be empty")]
    EmptyEffectiveId,
}

pub type Result<T> = std::result::Result<T, Error>;
