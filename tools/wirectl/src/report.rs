//! Command results and error reports

use errors::{ErrorInfo, WireError};
use serde_json::Value;

/// Output of one command, rendered as text or JSON by `main`
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Highlighted line printed before the body in text mode
    pub header: Option<String>,
    pub body: String,
    pub json: Value,
}

impl Report {
    pub fn new(body: impl Into<String>, json: Value) -> Self {
        Self {
            header: None,
            body: body.into(),
            json,
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// Machine-readable form of a command failure
///
/// Codec errors keep their own code; anything else is `INTERNAL_ERROR`.
/// Context added along the way goes into `details`.
pub fn error_info(err: &anyhow::Error) -> ErrorInfo {
    let info = match err.downcast_ref::<WireError>() {
        Some(wire) => wire.to_error_info(),
        None => ErrorInfo::new("INTERNAL_ERROR", err.to_string()),
    };

    if info.details.is_none() && err.chain().count() > 1 {
        info.with_details(format!("{:#}", err))
    } else {
        info
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use anyhow::Context;
    use serde_json::json;

    #[test]
    fn test_report_builder() {
        let report = Report::new("body", json!({"n": 1})).with_header("3 bytes");
        assert_eq!(report.header.as_deref(), Some("3 bytes"));
        assert_eq!(report.json["n"], 1);
    }

    #[test]
    fn test_error_info_from_wire_error() {
        let err = anyhow::Error::from(WireError::InvalidHexLength(3));
        let info = error_info(&err);
        assert_eq!(info.error_code, "INVALID_HEX_LENGTH");
        assert_eq!(info.code, 2);
        assert!(info.details.is_none());
    }

    #[test]
    fn test_error_info_keeps_context() {
        let result: Result<(), WireError> = Err(WireError::config("bad level"));
        let err = result.context("Failed to initialize logging").unwrap_err();
        let info = error_info(&err);
        assert_eq!(info.error_code, "CONFIGURATION_ERROR");
        assert_eq!(info.code, 1);
        assert!(info.details.unwrap().contains("bad level"));
    }

    #[test]
    fn test_error_info_other_errors() {
        let err = anyhow::anyhow!("boom");
        let info = error_info(&err);
        assert_eq!(info.error_code, "INTERNAL_ERROR");
        assert_eq!(info.message, "boom");
    }
}
