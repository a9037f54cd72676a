//! Error types for the calculator demo

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the calculator demo
#[derive(Error, Debug)]
pub enum Error {
    // === Arithmetic Errors ===
    #[error("Division by zero: cannot divide {dividend} by 0")]
    DivisionByZero { dividend: i32 },

    #[error("Integer overflow in {operation}({input}): result does not fit in i32")]
    Overflow { operation: String, input: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an overflow error for an operation and its operands
    pub fn overflow(operation: &str, operands: &[i32]) -> Self {
        Self::Overflow {
            operation: operation.to_string(),
            input: operands
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
