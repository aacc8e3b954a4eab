//! Configuration management for komora
//!
//! The config file holds the session credential (bearer token) alongside
//! the API host and user preferences. It is the single piece of state that
//! survives between invocations; it is populated by `komora login`, cleared
//! by `komora logout`, and cleared again whenever the backend answers 401.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default registry API host
pub const DEFAULT_API_HOST: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Registry API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Email of the logged-in administrator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Bearer token issued by the auth endpoint (opaque, no client-readable expiry)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format ("table" or "json")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path (~/.komora/config.yaml)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;
        Ok(home.join(".komora").join("config.yaml"))
    }

    /// Resolve the config path, honoring an explicit override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, honoring an optional path override
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration, honoring an optional path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(&path, contents)?;

        // Token lives in this file; keep it private
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// The effective API host (config value or default)
    pub fn api_host(&self) -> &str {
        self.api_host.as_deref().unwrap_or(DEFAULT_API_HOST)
    }

    /// Validate that a session credential is present
    pub fn validate_auth(&self) -> Result<()> {
        if self.token.is_none() {
            return Err(ConfigError::MissingToken.into());
        }
        Ok(())
    }

    /// Drop the stored session credential (logout or 401)
    pub fn clear_token(&mut self) {
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.token.is_none());
        assert!(config.email.is_none());
        assert_eq!(config.api_host(), DEFAULT_API_HOST);
    }

    #[test]
    fn test_validate_auth_requires_token() {
        let mut config = Config::default();
        assert!(config.validate_auth().is_err());

        config.token = Some("secret".to_string());
        assert!(config.validate_auth().is_ok());
    }

    #[test]
    fn test_clear_token() {
        let mut config = Config {
            token: Some("secret".to_string()),
            ..Default::default()
        };
        config.clear_token();
        assert!(config.token.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let path_str = path.to_string_lossy().to_string();

        let config = Config {
            api_host: Some("http://registry.test".to_string()),
            email: Some("admin@komora.me".to_string()),
            token: Some("tok-123".to_string()),
            preferences: Preferences {
                format: Some("json".to_string()),
            },
        };
        config.save_at(Some(&path_str)).unwrap();

        let loaded = Config::load_at(Some(&path_str)).unwrap();
        assert_eq!(loaded.api_host(), "http://registry.test");
        assert_eq!(loaded.email.as_deref(), Some("admin@komora.me"));
        assert_eq!(loaded.token.as_deref(), Some("tok-123"));
        assert_eq!(loaded.preferences.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = Config::load_at(Some(&path.to_string_lossy())).unwrap_err();
        assert!(err.to_string().contains("komora login"));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let config = Config::default();
        config.save_at(Some(&path.to_string_lossy())).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
