//! Error types for the seed configuration file.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Invalid ID length: {0}")]
    InvalidIdLength(String),
    #[error("Invalid ID format: {0}")]
    InvalidIdFormat(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Duplicate id error: {0}")]
    DuplicateId(String),
    #[error("Invalid cat {id}: {message}")]
    InvalidCat { id: String, message: String },
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
    #[error("File not found: {0}")]
    FileNotFound(String),
}
