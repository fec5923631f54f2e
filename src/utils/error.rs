use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Base64 decode error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("Hex decode error: {0}")]
    HexError(#[from] hex::FromHexError),

    #[error("Invalid GUID: {0}")]
    GuidError(#[from] uuid::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Date/time parse error: {0}")]
    DateParseError(#[from] chrono::ParseError),

    #[error("UTF-8 decode error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required value: {field}")]
    MissingValueError { field: String },

    #[error("Division by zero in {operation}")]
    DivideByZeroError { operation: String },

    #[error("Arithmetic overflow in {operation}")]
    OverflowError { operation: String },

    #[error("'{value}' is not a digit")]
    NotADigitError { value: char },

    #[error("'{value}' is not a letter")]
    NotALetterError { value: char },

    #[error("Invalid length {length}: must be a multiple of {multiple}")]
    InvalidLengthError { length: usize, multiple: usize },

    #[error("Crypto error: {message}")]
    CryptoError { message: String },

    #[error("Operation timed out after {elapsed:?}")]
    TimeoutError { elapsed: Duration },

    #[error("Operation was cancelled")]
    CancelledError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Format,
    Argument,
    Arithmetic,
    Config,
    Crypto,
    Async,
}

impl ExtError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ExtError::InvalidValueError {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn divide_by_zero(operation: &str) -> Self {
        ExtError::DivideByZeroError {
            operation: operation.to_string(),
        }
    }

    pub fn overflow(operation: &str) -> Self {
        ExtError::OverflowError {
            operation: operation.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ExtError::IoError(_) | ExtError::ZipError(_) => ErrorCategory::Io,
            ExtError::SerializationError(_)
            | ExtError::CsvError(_)
            | ExtError::Base64Error(_)
            | ExtError::HexError(_)
            | ExtError::GuidError(_)
            | ExtError::UrlError(_)
            | ExtError::DateParseError(_)
            | ExtError::Utf8Error(_) => ErrorCategory::Format,
            ExtError::InvalidValueError { .. }
            | ExtError::MissingValueError { .. }
            | ExtError::NotADigitError { .. }
            | ExtError::NotALetterError { .. }
            | ExtError::InvalidLengthError { .. } => ErrorCategory::Argument,
            ExtError::DivideByZeroError { .. } | ExtError::OverflowError { .. } => {
                ErrorCategory::Arithmetic
            }
            ExtError::ConfigError { .. } => ErrorCategory::Config,
            ExtError::CryptoError { .. } => ErrorCategory::Crypto,
            ExtError::TimeoutError { .. } | ExtError::CancelledError => ErrorCategory::Async,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtError>;
