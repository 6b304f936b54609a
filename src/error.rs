//! Client error type.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is scoped to the action that raised it. `Display` carries
//! diagnostic detail for the console log; `user_message` is the only text
//! that ever reaches the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Inline text for an empty question.
pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question";
/// Inline text when the copy button has nothing to copy.
pub const NOTHING_TO_COPY_MESSAGE: &str = "No answer to copy";
/// Inline text for every transport, status, or decode failure.
pub const ASK_FAILED_MESSAGE: &str = "Failed to get answer. Please try again.";
/// Inline text for clipboard failures.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy answer";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("question is empty")]
    EmptyQuestion,
    #[error("no answer is displayed")]
    NothingToCopy,
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("missing required element #{id}")]
    MissingElement { id: &'static str },
    #[error("element #{id} has the wrong type")]
    WrongElementType { id: &'static str },
    #[error("failed to listen for {event}: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("browser document is unavailable")]
    NoDocument,
    #[error("not available outside the browser")]
    Unavailable,
}

/// Coarse error classes used to decide how a failure is surfaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected locally before any I/O.
    Validation,
    /// Request boundary failures, collapsed to one generic message.
    Transport,
    /// Clipboard boundary failures.
    Clipboard,
    /// Page markup or browser environment problems found while attaching.
    Setup,
}

impl ErrorKind {
    /// Whether failures of this kind go to the console at error level.
    /// Validation failures are expected user input and only logged at debug.
    pub fn is_diagnostic(self) -> bool {
        !matches!(self, Self::Validation)
    }
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyQuestion | Self::NothingToCopy => ErrorKind::Validation,
            Self::Http { .. } | Self::Transport(_) | Self::Decode(_) | Self::Unavailable => ErrorKind::Transport,
            Self::Clipboard(_) => ErrorKind::Clipboard,
            Self::MissingElement { .. } | Self::WrongElementType { .. } | Self::Listener { .. } | Self::NoDocument => {
                ErrorKind::Setup
            }
        }
    }

    /// Text shown in the error region for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyQuestion => EMPTY_QUESTION_MESSAGE,
            Self::NothingToCopy => NOTHING_TO_COPY_MESSAGE,
            Self::Clipboard(_) => COPY_FAILED_MESSAGE,
            _ => ASK_FAILED_MESSAGE,
        }
    }
}
