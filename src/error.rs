//! Failure taxonomy
//!
//! Every failure here is local: the effect that hit it does not start and the
//! rest of the page carries on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmbientError {
    /// An element the effect binds to is not on the page
    #[error("element #{0} not found")]
    MissingElement(String),

    /// The element exists but is not the expected kind
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    /// The canvas refused to hand out a 2D context
    #[error("2d context unavailable on #{0}")]
    ContextUnavailable(String),

    /// No browser window (worker or non-browser host)
    #[error("no window or document")]
    NoDocument,

    /// The typing effect needs at least one role string
    #[error("typing effect needs at least one role")]
    NoRoles,

    /// A setting parsed but is outside what the effects can draw
    #[error("setting {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    /// Settings JSON could not be parsed
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AmbientError>;
