use thiserror::Error;

use crate::domain::BillError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Bill(#[from] BillError),

    #[error("Invalid command on line {line}: {reason}")]
    InvalidCommand { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] anyhow::Error),
}

impl AppError {
    /// True for errors that reject a single operation but leave the session usable.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Bill(_))
    }
}
