/// Error types for sqlx-scan-struct
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A result column has no field with the same (case-insensitive) name
    #[error("Column '{0}' has no matching field in the target struct")]
    UnmatchedColumn(String),

    /// Two result columns resolved to the same struct field
    #[error("Column '{0}' resolves to a field that is already bound by another column")]
    DuplicateColumn(String),

    /// Error from SQLx while decoding the row, passed through unchanged
    #[error("Decode error: {0}")]
    Decode(#[from] sqlx::Error),
}

/// Result type alias for sqlx-scan-struct operations
pub type Result<T> = std::result::Result<T, Error>;
