//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`COTIZA_*`)
//! 2. Defaults (this file)
//!
//! There is no config file and no database: the only configurable surface
//! of this app is the letterhead printed on exported reports.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::Serialize;

use cotiza_core::Letterhead;

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Organization block for the exported report letterhead.
    pub letterhead: Letterhead,
}

impl Default for ConfigState {
    /// Returns the issuing company's real letterhead.
    fn default() -> Self {
        ConfigState {
            letterhead: Letterhead::default(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `COTIZA_ORGANIZATION`: Override organization name
    /// - `COTIZA_TAX_ID`: Override RUT
    /// - `COTIZA_ADDRESS`: Override address line
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(organization) = std::env::var("COTIZA_ORGANIZATION") {
            config.letterhead.organization = organization;
        }

        if let Ok(tax_id) = std::env::var("COTIZA_TAX_ID") {
            config.letterhead.tax_id = tax_id;
        }

        if let Ok(address) = std::env::var("COTIZA_ADDRESS") {
            config.letterhead.address = address;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_letterhead() {
        let config = ConfigState::default();
        assert_eq!(config.letterhead.organization, "GESTIONES Y SERVICIOS MP");
        assert_eq!(config.letterhead.tax_id, "77.968.591-8");
        assert_eq!(
            config.letterhead.address,
            "Antonio Bellet 193, Of. 1210, Providencia, Santiago"
        );
    }
}
