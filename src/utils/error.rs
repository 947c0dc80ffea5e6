// Common error types for create-fast-vue3

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The user declined to overwrite a non-empty target or interrupted a prompt
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Invalid package name '{0}'")]
    InvalidName(String),

    #[error("Failed to fetch template: {0}")]
    FetchFailed(String),

    #[error("Template was not populated in {} after {attempts} checks", .path.display())]
    PopulationTimeout { path: PathBuf, attempts: u32 },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// A printable, exit-code-carrying view of a [`ScaffoldError`] for `main`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        use colored::Colorize;

        let message = match err {
            ScaffoldError::Cancelled => format!("{} Operation cancelled", "✖".red()),
            ScaffoldError::FetchFailed(msg) => format!("git clone err: {msg}"),
            other => other.to_string(),
        };

        Self {
            message,
            exit_code: 1,
        }
    }

    pub fn print(&self) {
        eprintln!("{}", self.message);
    }
}
