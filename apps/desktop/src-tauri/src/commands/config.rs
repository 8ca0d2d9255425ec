//! # Configuration Commands
//!
//! Read-only access to the application configuration.

use tauri::State;
use tracing::debug;

use crate::state::ConfigState;

/// Gets the current configuration (the report letterhead).
///
/// The frontend renders the same organization block the export carries, so
/// both come from this one state.
#[tauri::command]
pub fn get_config(config: State<'_, ConfigState>) -> ConfigState {
    debug!("get_config command");
    config.inner().clone()
}
