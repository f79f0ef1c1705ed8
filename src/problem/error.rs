//! Fix Error Types

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FixError {
    #[error("Problem '{problem}' does not provide an automatic fix")]
    NotSupported { problem: String },

    #[error("Fix for '{problem}' failed: {cause}")]
    Failed { problem: String, cause: String },
}

/// Result type for automatic fix attempts
pub type FixResult<T> = Result<T, FixError>;
