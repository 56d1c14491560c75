//! # Client Configuration
//!
//! Project credentials for the gateway. Secrets are loaded from
//! environment variables and never appear in `Debug` output.

use pakasir_core::{PakasirError, PakasirResult};
use std::env;
use std::fmt;

/// Default public base URL of the gateway. API calls append the `api`
/// path segment; payment-page URLs are joined directly to it.
pub const DEFAULT_BASE_URL: &str = "https://app.pakasir.com";

/// Gateway credentials for one project
#[derive(Clone)]
pub struct Config {
    /// Project slug from the gateway dashboard
    pub project: String,

    /// API key of the project
    pub api_key: String,
}

impl Config {
    /// Create a config with explicit values
    pub fn new(project: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            api_key: api_key.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAKASIR_PROJECT_SLUG`
    /// - `PAKASIR_API_KEY`
    pub fn from_env() -> PakasirResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let project = env::var("PAKASIR_PROJECT_SLUG").map_err(|_| {
            PakasirError::Configuration("PAKASIR_PROJECT_SLUG not set".to_string())
        })?;

        let api_key = env::var("PAKASIR_API_KEY")
            .map_err(|_| PakasirError::Configuration("PAKASIR_API_KEY not set".to_string()))?;

        let config = Self { project, api_key };
        config.validate()?;
        Ok(config)
    }

    /// Check that both credentials are present
    pub fn validate(&self) -> PakasirResult<()> {
        if self.project.is_empty() {
            return Err(PakasirError::Configuration(
                "project slug must not be empty".to_string(),
            ));
        }
        if self.api_key.is_empty() {
            return Err(PakasirError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// The API key must never reach logs, so Debug is hand-written.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("project", &self.project)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_credentials() {
        assert!(Config::new("", "key").validate().is_err());
        assert!(Config::new("demo-store", "").validate().is_err());
        assert!(Config::new("demo-store", "key").validate().is_ok());
    }

    #[test]
    fn test_from_env_missing_vars() {
        env::remove_var("PAKASIR_PROJECT_SLUG");
        env::remove_var("PAKASIR_API_KEY");

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("demo-store", "super-secret");
        let rendered = format!("{config:?}");

        assert!(rendered.contains("demo-store"));
        assert!(!rendered.contains("super-secret"));
    }
}
