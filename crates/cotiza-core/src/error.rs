//! # Error Types
//!
//! Domain-specific error types for cotiza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cotiza-core errors (this file)                                        │
//! │  ├── CoreError    - Document update failures (bad item index)          │
//! │  └── ExportError  - CSV rendering failures (structurally unreachable   │
//! │                     for in-memory writes, still propagated with `?`)   │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError     - What the frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: CoreError / ExportError → ApiError → Frontend                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, length)
//! 3. Errors are enum variants, never String
//!
//! Nearly every operation in this crate is total: numeric coercion swallows
//! bad input by design, and the totals calculator accepts any item list. The
//! one real contract edge is positional item access, which is an explicit
//! error here rather than the undefined behavior the original UI had.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Document update errors.
///
/// These represent contract violations by the caller (the UI layer), not
/// user-input problems. User input is coerced, never rejected.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An item operation referenced a position that is not in the list.
    ///
    /// ## When This Occurs
    /// - `set_item_field` or `remove_item` with a stale index, e.g. the
    ///   frontend fires a second remove for a row that is already gone
    #[error("Line item index {index} out of range (document has {len} items)")]
    ItemIndexOutOfRange { index: usize, len: usize },
}

// =============================================================================
// Export Error
// =============================================================================

/// CSV report rendering errors.
///
/// The report is written into an in-memory buffer, so these variants cannot
/// occur in practice; they exist so the writer's `Result`s are propagated
/// instead of unwrapped.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the in-memory buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered buffer was not valid UTF-8.
    #[error("report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemIndexOutOfRange { index: 4, len: 3 };
        assert_eq!(
            err.to_string(),
            "Line item index 4 out of range (document has 3 items)"
        );
    }
}
