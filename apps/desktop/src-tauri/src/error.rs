//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Cotiza                                │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('remove_item')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad index? ──── CoreError::ItemIndexOutOfRange ──┐             │  │
//! │  │         │                                         ▼             │  │
//! │  │  Export I/O failed? ── std::io::Error ────────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) { /* e.code = "NOT_FOUND", e.message = "Line item..." */ }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the narrow surface: numeric input is coerced in core, never
//! rejected, so the only errors the frontend can see are a stale item index
//! and a failed export write.
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

use cotiza_core::{CoreError, ExportError};

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Line item index 4 out of range (document has 3 items)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced position does not exist (stale index)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Writing the exported file failed
    ExportError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an export error.
    pub fn export(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ExportError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts document errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemIndexOutOfRange { .. } => ApiError::not_found(err.to_string()),
        }
    }
}

/// Converts report rendering errors to API errors.
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        // Rendering is in-memory; a failure here is unexpected enough to log
        tracing::error!("report rendering failed: {}", err);
        ApiError::export(err.to_string())
    }
}

/// Converts file-write errors to API errors.
impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("export write failed: {}", err);
        ApiError::export(format!("could not write export file: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_maps_to_not_found() {
        let err: ApiError = CoreError::ItemIndexOutOfRange { index: 9, len: 2 }.into();
        assert!(matches!(err.code, ErrorCode::NotFound));
        assert!(err.message.contains("index 9"));
    }

    #[test]
    fn test_io_error_maps_to_export_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ApiError = io.into();
        assert!(matches!(err.code, ErrorCode::ExportError));
    }
}
