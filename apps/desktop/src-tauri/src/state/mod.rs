//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types? (Option B)
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in tests
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(quotation_state);                                   │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                ┌─────────────┴─────────────┐                           │
//! │                ▼                           ▼                            │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │    QuotationState        │  │      ConfigState         │            │
//! │  │                          │  │                          │            │
//! │  │  Arc<Mutex<Quotation>>   │  │  letterhead              │            │
//! │  │  (the one document)      │  │  (read-only)             │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • QuotationState: Protected by Arc<Mutex<T>> for exclusive access     │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod quotation;

pub use config::ConfigState;
pub use quotation::QuotationState;
