//! Error types for the ec-app service layer.

/// Application error type shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Convert(#[from] ec_core::ConvertError),

    #[error(transparent)]
    Selection(#[from] ec_core::SelectionError),

    #[error("Store error: {0}")]
    Store(#[from] ec_store::StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for ec-app operations.
pub type AppResult<T> = Result<T, AppError>;
