//! Error types for the calculator and its settings store.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown in the secondary display when dividing by zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Error: Cannot divide by zero";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Error: Cannot divide by zero")]
    DivideByZero,
    #[error("invalid input token: {0:?}")]
    InvalidToken(char),
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no configuration directory available")]
    NoConfigDir,
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_message_matches_display() {
        assert_eq!(CalcError::DivideByZero.to_string(), DIVIDE_BY_ZERO_MESSAGE);
    }
}
