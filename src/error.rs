//! Fatal errors surfaced before any analysis starts

use std::path::PathBuf;
use thiserror::Error;

/// Invalid configuration. Nothing here is raised once analysis has begun:
/// unreadable files are logged and skipped instead.
#[derive(Debug, Error)]
pub enum AssessError {
    #[error("Project path not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("Project path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
