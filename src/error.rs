//! Error types for ntz

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ntz application
#[derive(Debug, Error)]
pub enum NtzError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Index {index} is out of range (category has {len} notes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Storage unavailable at {}: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("Unrecognized confirmation: {0}")]
    InvalidConfirmation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NtzError {
    /// Build a storage error for the given file
    pub fn storage(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        NtzError::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NtzError::UnknownCommand(_) => 2,
            NtzError::CategoryNotFound(_) => 3,
            NtzError::IndexOutOfRange { .. } | NtzError::InvalidInput(_) => 4,
            NtzError::StorageUnavailable { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NtzError::UnknownCommand(cmd) => {
                format!(
                    "Unknown command: '{}'\n\n\
                    Available commands:\n\
                    • ntz                          list everything\n\
                    • ntz r [note]                 remember a note\n\
                    • ntz -c [category]            create a category\n\
                    • ntz l [category]             list one category\n\
                    • ntz e                        edit a note or category\n\
                    • ntz f                        forget a note or category\n\
                    • ntz clear                    forget everything\n\
                    • ntz <any> <note> <category>  remember directly",
                    cmd
                )
            }
            NtzError::CategoryNotFound(name) => {
                format!(
                    "Category not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'ntz' to see existing categories\n\
                    • Category names are case-sensitive\n\
                    • Create it first with 'ntz -c {}'",
                    name, name
                )
            }
            NtzError::IndexOutOfRange { index, len } => {
                if *len == 0 {
                    format!("Note {} does not exist: the category is empty", index)
                } else {
                    format!(
                        "Note {} does not exist\n\n\
                        Valid note numbers: 1 to {}",
                        index, len
                    )
                }
            }
            NtzError::StorageUnavailable { path, reason } => {
                format!(
                    "Cannot use note storage {}: {}\n\n\
                    Suggestions:\n\
                    • Check that the file exists and is readable\n\
                    • The file must map category names to lists of notes\n\
                    • Set 'storage' in ntz.toml to use a different file",
                    path.display(),
                    reason
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NtzError
pub type Result<T> = std::result::Result<T, NtzError>;
