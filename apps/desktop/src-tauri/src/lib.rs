//! # Cotiza Desktop Library
//!
//! Core library for the Cotiza desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! cotiza_desktop_lib/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── quotation.rs  ◄─── Quotation document container
//! │   └── config.rs     ◄─── Letterhead configuration
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── quotation.rs  ◄─── Header / client / terms commands
//! │   ├── items.rs      ◄─── Line item commands
//! │   ├── export.rs     ◄─── CSV export command
//! │   └── config.rs     ◄─── Configuration retrieval
//! └── error.rs          ◄─── API error type for commands
//! ```
//!
//! ## State Management (Option B: Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state
//! types: the one mutable document, and the read-only configuration. Each
//! command only requests the state it needs.

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use directories::UserDirs;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use state::{ConfigState, QuotationState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • QuotationState: the seed document behind a Mutex                  │
/// │     • ConfigState: letterhead (defaults + COTIZA_* env overrides)       │
/// │                                                                         │
/// │  3. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Cotiza Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            use tauri::Manager;

            // Initialize state objects
            let quotation_state = QuotationState::new();
            let config_state = ConfigState::from_env();

            // Register state with Tauri
            app.manage(quotation_state);
            app.manage(config_state);

            info!("State initialized with seed quotation");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Document commands
            commands::quotation::get_quotation,
            commands::quotation::set_quotation_number,
            commands::quotation::set_quotation_date,
            commands::quotation::set_validity_days,
            commands::quotation::set_authorized_by,
            commands::quotation::set_client_field,
            commands::quotation::set_terms_field,
            // Item commands
            commands::items::add_item,
            commands::items::set_item_field,
            commands::items::remove_item,
            // Export commands
            commands::export::export_csv,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cotiza=trace` - Show trace for cotiza crates only
/// - Default: INFO level, DEBUG for our own crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,cotiza=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Determines the directory exported CSV files are written to.
///
/// ## Resolution Order
/// 1. `COTIZA_EXPORT_DIR` environment variable (development override)
/// 2. The platform Downloads directory - exporting is the desktop analog of
///    the browser download the original form triggered
/// 3. The current directory, if the platform reports no Downloads folder
pub fn export_dir() -> PathBuf {
    if let Ok(path) = std::env::var("COTIZA_EXPORT_DIR") {
        return PathBuf::from(path);
    }

    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
