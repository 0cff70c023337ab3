use std::path::PathBuf;

mod listing;
mod ops;

pub use listing::{list_directory, render_listing, DirEntryInfo};
pub use ops::{
    create_directory, create_file, delete_file, execute_removal, read_file, remove_directory,
    strip_quotes, write_file,
};

pub(crate) const RULE: &str = "----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    WrongType,
    NotEmpty,
    Protected,
    Io,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::WrongType => write!(f, "wrong type"),
            FailureKind::NotEmpty => write!(f, "not empty"),
            FailureKind::Protected => write!(f, "protected"),
            FailureKind::Io => write!(f, "io failure"),
        }
    }
}

/// Outcome of a single filesystem action. Errors never cross this boundary
/// as `io::Error`; they arrive as a `Failure` with a rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    Success(String),
    Failure(FailureKind, String),
}

impl OperationResult {
    pub fn message(&self) -> &str {
        match self {
            OperationResult::Success(msg) | OperationResult::Failure(_, msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            OperationResult::Success(_) => None,
            OperationResult::Failure(kind, _) => Some(*kind),
        }
    }
}

impl std::fmt::Display for OperationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// `remove_directory` either completes (including all failure cases) or asks
/// the caller to run the y/n confirmation protocol before re-invoking the
/// removal through [`execute_removal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Completed(OperationResult),
    NeedsConfirmation {
        question: String,
        target: PathBuf,
        recursive: bool,
    },
}
