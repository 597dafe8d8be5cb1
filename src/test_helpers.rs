//! Shared config fixtures for unit tests.

use crate::config::{self, SiteConfig};

/// The full sample configuration (every section present) from
/// [`config::sample_config_json`].
pub(crate) fn sample_config() -> SiteConfig {
    serde_json::from_str(&config::sample_config_json()).expect("sample config parses")
}

/// The smallest valid configuration: a business name and nothing else.
pub(crate) fn minimal_config() -> SiteConfig {
    serde_json::from_str(r#"{"businessName": "Acme Digging"}"#).expect("minimal config parses")
}
