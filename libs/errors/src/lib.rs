//! Unified error handling for wirekit
//!
//! Every crate in the workspace reports failures through [`WireError`].
//! Range arguments that run past the end of a buffer are clamped by the
//! codec and never surface here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ErrorInfo - machine-readable error report
// ============================================================================

/// Error report emitted by tools in JSON mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Numeric code (2 = invalid argument, 1 = everything else)
    pub code: u8,
    /// Stable symbolic code, e.g. `INVALID_HEX_CHAR`
    pub error_code: String,
    /// Error message
    pub message: String,
    /// Detailed error description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorInfo {
    /// Create a new ErrorInfo with just a message
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: 1,
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Set the numeric code
    pub fn with_code(mut self, code: u8) -> Self {
        self.code = code;
        self
    }

    /// Add details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Render as a single JSON line
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":{},"error_code":"{}"}}"#,
                self.code, self.error_code
            )
        })
    }
}

// ============================================================================
// WireError - Main error type
// ============================================================================

/// Main error type for all wirekit crates
#[derive(Debug, Error)]
pub enum WireError {
    // ======================================
    // Invalid Argument Errors
    // ======================================
    #[error("Invalid hex char '{0}'")]
    InvalidHexChar(char),

    #[error("Invalid HEX string length: {0}")]
    InvalidHexLength(usize),

    #[error("Algorithm name is required")]
    MissingAlgorithm,

    #[error("Unknown checksum algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid parameter: {param}: {reason}")]
    InvalidParameter { param: String, reason: String },

    // ======================================
    // Bounds Errors
    // ======================================
    #[error("Buffer too short: need {needed} bytes at offset {offset}, have {available}")]
    BufferTooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },

    // ======================================
    // Configuration & I/O Errors
    // ======================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using WireError
pub type Result<T> = std::result::Result<T, WireError>;

/// Error category enum - used for classification and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed caller input (bad hex digit, odd hex length, unknown algorithm)
    InvalidArgument,
    /// Fixed-width read past the end of a buffer
    Bounds,
    Configuration,
    Io,
}

impl WireError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Get error code (for JSON output and logs)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidHexChar(_) => "INVALID_HEX_CHAR",
            Self::InvalidHexLength(_) => "INVALID_HEX_LENGTH",
            Self::MissingAlgorithm => "MISSING_ALGORITHM",
            Self::UnknownAlgorithm(_) => "UNKNOWN_ALGORITHM",
            Self::InvalidParameter { .. } => "INVALID_PARAMETER",
            Self::BufferTooShort { .. } => "BUFFER_TOO_SHORT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidHexChar(_)
            | Self::InvalidHexLength(_)
            | Self::MissingAlgorithm
            | Self::UnknownAlgorithm(_)
            | Self::InvalidParameter { .. } => ErrorCategory::InvalidArgument,
            Self::BufferTooShort { .. } => ErrorCategory::Bounds,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    /// Check if the caller supplied a malformed argument
    pub fn is_invalid_argument(&self) -> bool {
        self.category() == ErrorCategory::InvalidArgument
    }

    /// Get log level
    pub fn log_level(&self) -> tracing::Level {
        match self.category() {
            ErrorCategory::InvalidArgument | ErrorCategory::Bounds => tracing::Level::DEBUG,
            ErrorCategory::Configuration => tracing::Level::WARN,
            ErrorCategory::Io => tracing::Level::ERROR,
        }
    }

    /// Convert to ErrorInfo for machine-readable output
    pub fn to_error_info(&self) -> ErrorInfo {
        let code = if self.is_invalid_argument() { 2 } else { 1 };
        let info = ErrorInfo::new(self.error_code(), self.to_string()).with_code(code);

        match self {
            Self::InvalidParameter { param, reason } => {
                info.with_details(format!("{}: {}", param, reason))
            },
            Self::BufferTooShort {
                offset,
                needed,
                available,
            } => info.with_details(format!(
                "requested {}..{}, buffer length {}",
                offset,
                offset.saturating_add(*needed),
                available
            )),
            _ => info,
        }
    }
}

impl From<std::num::ParseIntError> for WireError {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::invalid_parameter("integer", err.to_string())
    }
}
