//! # Quotation State
//!
//! Holds the one quotation document for the session.
//!
//! ## Thread Safety
//! The document is wrapped in `Arc<Mutex<T>>` because:
//! 1. Tauri commands can run on different threads
//! 2. Only one command may modify the document at a time
//! 3. Last-write-wins editing requires updates to be serialized
//!
//! ## Document Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Quotation State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Document Change       │
//! │  ───────────────          ─────────────           ───────────────       │
//! │                                                                         │
//! │  Edit client input ──────► set_client_field() ──► client.name = v      │
//! │                                                                         │
//! │  Edit item cell ─────────► set_item_field() ────► items[i].qty = n     │
//! │                                                                         │
//! │  Click "Agregar Item" ───► add_item() ──────────► items.push(blank)    │
//! │                                                                         │
//! │  Click trash icon ───────► remove_item() ───────► items.remove(i)      │
//! │                                                                         │
//! │  Click export ───────────► export_csv() ────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Every command acquires the Mutex for its whole                   │
//! │        read-modify-return, so responses are always a coherent           │
//! │        snapshot of one document state.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use cotiza_core::Quotation;

/// Tauri-managed quotation document state.
///
/// ## Why Not RwLock?
/// Document operations are quick and most of them write.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct QuotationState {
    document: Arc<Mutex<Quotation>>,
}

impl QuotationState {
    /// Creates the session document, starting from the seed state.
    pub fn new() -> Self {
        QuotationState {
            document: Arc::new(Mutex::new(Quotation::seed())),
        }
    }

    /// Executes a function with read access to the document.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.with_document(|q| QuotationTotals::from(q));
    /// ```
    pub fn with_document<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Quotation) -> R,
    {
        let document = self.document.lock().expect("Quotation mutex poisoned");
        f(&document)
    }

    /// Executes a function with write access to the document.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_document_mut(|q| q.remove_item(index))?;
    /// ```
    pub fn with_document_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Quotation) -> R,
    {
        let mut document = self.document.lock().expect("Quotation mutex poisoned");
        f(&mut document)
    }
}

impl Default for QuotationState {
    fn default() -> Self {
        Self::new()
    }
}
