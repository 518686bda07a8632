use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("position ({row}, {col}) is outside the 6x5 board")]
    InvalidPosition { row: usize, col: usize },
    #[error("invalid notation {0:?}")]
    InvalidNotation(String),
}
