//! Remediation Error Types

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemediationError {
    #[error("No scanner at index {index}")]
    UnknownScanner { index: usize },

    #[error("Scanner '{scanner}' has no problem at index {index}")]
    UnknownProblem { scanner: String, index: usize },
}

/// Result type for remediation operations
pub type RemediationResult<T> = Result<T, RemediationError>;
