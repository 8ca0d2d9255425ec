//! # Export Commands
//!
//! Tauri command that turns the current document into the downloadable CSV.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Click "Exportar a CSV"                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  invoke('export_csv')                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Snapshot the document (mutex held only for the clone)      │    │
//! │  │  2. render_report(document, letterhead)   ← cotiza-core, pure  │    │
//! │  │  3. Write UTF-8 file into Downloads (or COTIZA_EXPORT_DIR)     │    │
//! │  │     as Cotizacion_<sanitized-number>.csv (text/csv content)    │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  { path, fileName } → frontend shows where the file landed             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Printing has no command here: the frontend calls `window.print()` and the
//! platform print pipeline takes over.

use std::fs;

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, QuotationState};
use cotiza_core::{export_file_name, render_report};

/// Export response: where the CSV was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCsvResponse {
    /// Absolute path of the written file.
    pub path: String,

    /// Just the file name, for the confirmation toast.
    pub file_name: String,
}

/// Renders the current document as CSV and writes it to the export
/// directory.
///
/// The report is a pure function of the document: invoking this twice
/// without an edit in between writes byte-identical files.
///
/// ## Errors
/// `EXPORT_ERROR` if the file cannot be written (permissions, missing
/// directory). Rendering itself cannot fail for any document state.
#[tauri::command]
pub fn export_csv(
    quotation: State<'_, QuotationState>,
    config: State<'_, ConfigState>,
) -> Result<ExportCsvResponse, ApiError> {
    debug!("export_csv command");

    // Snapshot under the lock, render and write outside it
    let document = quotation.with_document(|q| q.clone());

    let report = render_report(&document, &config.letterhead)?;
    let file_name = export_file_name(&document.number);

    let dir = crate::export_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(&file_name);
    fs::write(&path, report.as_bytes())?;

    info!(path = %path.display(), items = document.item_count(), "Quotation exported");

    Ok(ExportCsvResponse {
        path: path.display().to_string(),
        file_name,
    })
}
