use thiserror::Error;

/// Errors surfaced by storage and the command layer.
///
/// The recommendation and progress modules are total and never produce one.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Task '{0}' not found")]
    TaskNotFound(String),

    #[error("Task id prefix '{0}' matches more than one task")]
    AmbiguousId(String),

    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    #[error("No template #{number} for the current motivation in category '{category}'")]
    TemplateNotFound { category: String, number: usize },

    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Category name cannot be empty")]
    EmptyName,

    #[error("Unsupported shell: {0}")]
    UnsupportedShell(String),
}

pub type Result<T> = std::result::Result<T, Error>;
