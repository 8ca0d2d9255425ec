//! # Line Item Commands
//!
//! Tauri commands for the item table.
//!
//! ## Item Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Item Table Lifecycle                                 │
//! │                                                                         │
//! │  Click "Agregar Item" ────► add_item ───────► blank row appended       │
//! │                                               (qty 1, price 0)         │
//! │                                                                         │
//! │  Edit any cell ───────────► set_item_field ─► one field replaced,      │
//! │                                               numerics coerced         │
//! │                                                                         │
//! │  Click trash icon ────────► remove_item ────► row dropped, rows        │
//! │                                               below shift up           │
//! │                                                                         │
//! │  Items are addressed by POSITION. A stale index (double-fired          │
//! │  remove, row already gone) returns NOT_FOUND instead of touching      │
//! │  a neighboring row.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tauri::State;
use tracing::debug;

use crate::commands::quotation::QuotationResponse;
use crate::error::ApiError;
use crate::state::QuotationState;
use cotiza_core::ItemField;

/// Appends a blank line item to the end of the table.
///
/// ## Returns
/// Updated document; existing rows are never altered by an append.
#[tauri::command]
pub fn add_item(quotation: State<'_, QuotationState>) -> QuotationResponse {
    debug!("add_item command");
    quotation.with_document_mut(|q| {
        q.add_item();
        QuotationResponse::from(&*q)
    })
}

/// Replaces one field of the item at `index`.
///
/// `value` is the raw input text; for `quantity`/`unit_price` it coerces to
/// a non-negative integer (`0` on any parse failure), for `code`/
/// `description` it is stored verbatim, blanks included.
///
/// ## Errors
/// `NOT_FOUND` if `index` is not a valid position.
#[tauri::command]
pub fn set_item_field(
    quotation: State<'_, QuotationState>,
    index: usize,
    field: ItemField,
    value: String,
) -> Result<QuotationResponse, ApiError> {
    debug!(index, ?field, "set_item_field command");
    quotation.with_document_mut(|q| {
        q.set_item_field(index, field, &value)?;
        Ok(QuotationResponse::from(&*q))
    })
}

/// Removes the item at `index`; following rows shift up one position.
///
/// ## Errors
/// `NOT_FOUND` if `index` is not a valid position (including any removal
/// from an empty table).
#[tauri::command]
pub fn remove_item(
    quotation: State<'_, QuotationState>,
    index: usize,
) -> Result<QuotationResponse, ApiError> {
    debug!(index, "remove_item command");
    quotation.with_document_mut(|q| {
        q.remove_item(index)?;
        Ok(QuotationResponse::from(&*q))
    })
}
