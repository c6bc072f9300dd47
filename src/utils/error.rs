use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Field {field} must be a string")]
    InvalidType { field: &'static str },

    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum EmployeeError {
    #[error("Missing request body")]
    MissingBody,

    #[error("Malformed request body: {message}")]
    MalformedInput { message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something we refuse to process.
    Client,
    /// Anything that went wrong on our side of the boundary.
    Server,
}

impl EmployeeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EmployeeError::MissingBody | EmployeeError::Validation(_) => ErrorCategory::Client,
            _ => ErrorCategory::Server,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Client => 400,
            ErrorCategory::Server => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, EmployeeError>;
