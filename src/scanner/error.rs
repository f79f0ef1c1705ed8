//! Scanner Error Types

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    #[error("Scanner '{scanner}' failed: {cause}")]
    ScanFailed { scanner: String, cause: String },

    #[error("Scan operation failed: {message}")]
    OperationFailed { message: String },
}

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;
