//! One-line confirmations for session and history operations.

use std::fmt;

/// Outcome message shown after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Done(String),
    Failed(String),
}

impl OperationStatus {
    pub fn done(message: impl Into<String>) -> Self {
        Self::Done(message.into())
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(message) => writeln!(f, "**Done:** {message}"),
            Self::Failed(message) => writeln!(f, "**Error:** {message}"),
        }
    }
}
