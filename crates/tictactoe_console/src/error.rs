//! Session error types.

use derive_more::Display;
use tictactoe_core::InvalidMove;

/// What went wrong while running a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// Reading from or writing to the terminal failed.
    #[display("I/O")]
    Io,
    /// The input reached end-of-file.
    #[display("input closed")]
    InputClosed,
    /// The game refused a move that should have been legal.
    #[display("rule")]
    Rule,
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, derive_more::Error)]
#[display("Session {} error: {} at {}:{}", kind, message, file, line)]
pub struct SessionError {
    /// Error category.
    pub kind: SessionErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Error for an input stream that reached end-of-file.
    #[track_caller]
    pub fn input_closed() -> Self {
        Self::new(SessionErrorKind::InputClosed, "No more input")
    }

    /// Whether the input ran out, which ends a session cleanly.
    pub fn is_input_closed(&self) -> bool {
        self.kind == SessionErrorKind::InputClosed
    }
}

impl From<std::io::Error> for SessionError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(SessionErrorKind::Io, format!("Terminal error: {}", err))
    }
}

impl From<InvalidMove> for SessionError {
    #[track_caller]
    fn from(err: InvalidMove) -> Self {
        Self::new(SessionErrorKind::Rule, format!("Move rejected: {}", err))
    }
}
