//! # Tauri Commands Module
//!
//! All commands exposed to the webview frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── quotation.rs  ◄─── Header / client / terms editing
//! ├── items.rs      ◄─── Line item editing
//! ├── export.rs     ◄─── CSV export
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ─────────                                                              │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const doc = await invoke('set_item_field', {                           │
//! │    index: 0,                                                            │
//! │    field: 'quantity',                                                   │
//! │    value: '100'                                                         │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn set_item_field(                                                     │
//! │      quotation: State<'_, QuotationState>,  ◄── Injected by Tauri      │
//! │      index: usize,                          ◄── From invoke params     │
//! │      field: ItemField,                      ◄── Closed enum            │
//! │      value: String,                                                     │
//! │  ) -> Result<QuotationResponse, ApiError>                               │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives the FULL new document + totals and re-renders.      │
//! │  The UI never holds document state of its own.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod export;
pub mod items;
pub mod quotation;
