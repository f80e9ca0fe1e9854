//! Error types and exit codes for cinerec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid argument values)
//! - 3: Data error (unknown user or item, empty corpus, duplicate ids)

mod macros;

use thiserror::Error;

/// Exit codes for the cinerec binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown ids, empty corpus (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during recommendation operations
#[derive(Error, Debug)]
pub enum CinerecError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },

    // Data errors (exit code 3)
    #[error("cannot fit vectorizer on an empty corpus")]
    EmptyCorpus,

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl CinerecError {
    /// Create an error for an argument outside its accepted domain
    pub fn invalid_argument(context: &str, value: impl std::fmt::Display) -> Self {
        CinerecError::InvalidArgument {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CinerecError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        CinerecError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CinerecError::UsageError(_) | CinerecError::InvalidArgument { .. } => ExitCode::Usage,

            CinerecError::EmptyCorpus
            | CinerecError::NotFound { .. }
            | CinerecError::AlreadyExists { .. } => ExitCode::Data,

            CinerecError::Io(_)
            | CinerecError::Json(_)
            | CinerecError::Toml(_)
            | CinerecError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CinerecError::UsageError(_) => "usage_error",
            CinerecError::InvalidArgument { .. } => "invalid_argument",
            CinerecError::EmptyCorpus => "empty_corpus",
            CinerecError::NotFound { .. } => "not_found",
            CinerecError::AlreadyExists { .. } => "already_exists",
            CinerecError::Io(_) => "io_error",
            CinerecError::Json(_) => "json_error",
            CinerecError::Toml(_) => "toml_error",
            CinerecError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for cinerec operations
pub type Result<T> = std::result::Result<T, CinerecError>;
