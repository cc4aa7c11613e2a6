use std::path::Path;

use serde::{Deserialize, Serialize};

// ============================================================================
// Site Configuration
// ============================================================================
//
// The sync hooks read exactly one site preference. SitePreferences is the
// seam the gate depends on; SiteConfig is the loaded, serde-backed value.
//
// ============================================================================

/// Env var naming a JSON site configuration file
pub const CONFIG_PATH_ENV: &str = "CUSTOMER_SYNC_CONFIG";

/// Env var overriding the sync preference
pub const SYNC_FLAG_ENV: &str = "B2CCRM_SYNC_CUSTOMERS_VIA_OCAPI";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Read access to the site preferences the sync hooks care about
pub trait SitePreferences: Send + Sync {
    /// Whether customer create/update events are forwarded at all
    fn sync_customers_enabled(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomPreferences {
    #[serde(rename = "b2ccrm_syncCustomersViaOCAPI", default)]
    pub sync_customers_via_ocapi: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_id")]
    pub site_id: String,
    #[serde(default, rename = "customPreferences")]
    pub preferences: CustomPreferences,
}

fn default_site_id() -> String {
    "default".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_id: default_site_id(),
            preferences: CustomPreferences::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// File from CUSTOMER_SYNC_CONFIG (or defaults), then the env flag override
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!(path = %path, "Loading site configuration");
                Self::from_file(path)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(raw) = std::env::var(SYNC_FLAG_ENV) {
            config.preferences.sync_customers_via_ocapi = parse_flag(SYNC_FLAG_ENV, &raw)?;
        }

        Ok(config)
    }
}

impl SitePreferences for SiteConfig {
    fn sync_customers_enabled(&self) -> bool {
        self.preferences.sync_customers_via_ocapi
    }
}

/// Fixed answer, for wiring and tests
#[derive(Debug, Clone, Copy)]
pub struct StaticPreferences {
    pub sync_enabled: bool,
}

impl StaticPreferences {
    pub fn enabled() -> Self {
        Self { sync_enabled: true }
    }

    pub fn disabled() -> Self {
        Self { sync_enabled: false }
    }
}

impl SitePreferences for StaticPreferences {
    fn sync_customers_enabled(&self) -> bool {
        self.sync_enabled
    }
}

pub(crate) fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_site_config() {
        let config = SiteConfig::from_json_str(
            r#"{"site_id": "RefArch", "customPreferences": {"b2ccrm_syncCustomersViaOCAPI": true}}"#,
        )
        .unwrap();

        assert_eq!(config.site_id, "RefArch");
        assert!(config.sync_customers_enabled());
    }

    #[test]
    fn test_missing_preference_disables_sync() {
        let config = SiteConfig::from_json_str(r#"{"customPreferences": {}}"#).unwrap();
        assert_eq!(config.site_id, "default");
        assert!(!config.sync_customers_enabled());

        let config = SiteConfig::from_json_str("{}").unwrap();
        assert!(!config.sync_customers_enabled());
    }

    #[test]
    fn test_malformed_config() {
        let err = SiteConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let err = SiteConfig::from_file("/nonexistent/customer_sync.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(SYNC_FLAG_ENV, "TRUE").unwrap());
        assert!(parse_flag(SYNC_FLAG_ENV, " on ").unwrap());
        assert!(!parse_flag(SYNC_FLAG_ENV, "0").unwrap());
        assert!(!parse_flag(SYNC_FLAG_ENV, "Off").unwrap());
        assert!(matches!(
            parse_flag(SYNC_FLAG_ENV, "maybe"),
            Err(ConfigError::InvalidFlag { name: SYNC_FLAG_ENV, .. })
        ));
    }

    // Env vars are process-wide, so every load() case lives in this one test.
    #[test]
    fn test_load_from_file_with_env_override() {
        let path = std::env::temp_dir()
            .join(format!("customer_sync_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{"site_id": "RefArch", "customPreferences": {"b2ccrm_syncCustomersViaOCAPI": true}}"#,
        )
        .unwrap();

        std::env::set_var(CONFIG_PATH_ENV, &path);
        std::env::remove_var(SYNC_FLAG_ENV);

        let config = SiteConfig::load().unwrap();
        assert_eq!(config.site_id, "RefArch");
        assert!(config.sync_customers_enabled());

        std::env::set_var(SYNC_FLAG_ENV, "off");
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.site_id, "RefArch");
        assert!(!config.sync_customers_enabled());

        std::env::set_var(SYNC_FLAG_ENV, "maybe");
        let err = SiteConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { name: SYNC_FLAG_ENV, .. }));

        std::env::remove_var(SYNC_FLAG_ENV);
        std::env::remove_var(CONFIG_PATH_ENV);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_static_preferences() {
        assert!(StaticPreferences::enabled().sync_customers_enabled());
        assert!(!StaticPreferences::disabled().sync_customers_enabled());
    }
}
