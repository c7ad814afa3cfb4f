//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Broad classification of a [`DirectoryError`], used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced activity does not exist.
    NotFound,
    /// The mutation is invalid given the current roster.
    Conflict,
}

/// Errors returned by operations on the activity directory.
///
/// The display strings are part of the public contract: clients match on
/// "not found", "already signed up" and "not registered".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound { activity: String },
    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },
    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::NotFound { .. } => ErrorKind::NotFound,
            DirectoryError::AlreadySignedUp { .. } | DirectoryError::NotRegistered { .. } => {
                ErrorKind::Conflict
            }
        }
    }
}
