/// Convenience result type used across bitscarf.
pub type BitscarfResult<T> = Result<T, BitscarfError>;

/// Top-level error taxonomy. Every failure is terminal; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum BitscarfError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed color literal.
    #[error("color error: {0}")]
    Color(String),

    /// Input text reduced to nothing by the filter pass.
    #[error("input text is empty after filtering")]
    EmptyInput,

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BitscarfError {
    /// Build a [`BitscarfError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BitscarfError::Color`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }
}
