use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    /// Caller passed a policy name outside the allowed set.
    #[error("invalid policy '{0}': expected 'middle' or 'mean'")]
    InvalidPolicy(String),
    /// Single-column inverse transform requested for a column that was never fitted.
    #[error("no fitted mapping for column '{0}'")]
    UnfittedColumn(String),
    /// Label transform encountered a value absent from the fitted classes.
    #[error("unseen label '{value}' in column '{column}'")]
    UnseenLabel { column: String, value: String },
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
