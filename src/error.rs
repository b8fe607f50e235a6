//! Error types for Searchpad

use thiserror::Error;

/// Main error type for Searchpad operations
///
/// Browser-launch failures are deliberately absent: dispatch is
/// fire-and-forget and the launch result is never inspected.
#[derive(Error, Debug)]
pub enum SearchpadError {
    #[error("GUI error: {0}")]
    Gui(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for Searchpad operations
pub type Result<T> = std::result::Result<T, SearchpadError>;
