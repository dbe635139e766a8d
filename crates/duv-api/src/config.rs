//! # Service Configuration
//!
//! Layered settings, later sources win:
//! 1. Built-in defaults
//! 2. A TOML file (`duv.toml` in the working directory, or an explicit path)
//! 3. Environment variables prefixed `DUV_` (e.g. `DUV_PORT=8080`), after a
//!    `.env` file has been loaded if present
//!
//! Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use duv_core::logging_facility::Profile;
use serde::Deserialize;

/// Default file looked up when no explicit path is given (extension optional)
pub const DEFAULT_CONFIG_NAME: &str = "duv";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// JSON seed file; `None` serves the built-in fallback dataset
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
    pub log_profile: String,
    /// Skip reference checks on declaration updates
    pub lenient_declaration_updates: bool,
    /// Reject crew created without a `sid` instead of generating one
    pub require_crew_service_id: bool,
    pub body_limit_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            seed_path: None,
            log_profile: "development".to_string(),
            lenient_declaration_updates: false,
            require_crew_service_id: false,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl ApiConfig {
    /// Load configuration from defaults, file and environment
    ///
    /// An explicit `path` must exist; the default `duv.toml` is optional.
    ///
    /// # Errors
    ///
    /// Returns the `config` crate's error when a file is unreadable or a
    /// value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        if let Ok(env_file) = dotenvy::dotenv() {
            tracing::debug!(path = %env_file.display(), "loaded .env file");
        }

        let defaults = Self::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_profile", defaults.log_profile)?
            .set_default(
                "lenient_declaration_updates",
                defaults.lenient_declaration_updates,
            )?
            .set_default("require_crew_service_id", defaults.require_crew_service_id)?
            .set_default("body_limit_bytes", defaults.body_limit_bytes as i64)?
            .add_source(file)
            .add_source(Environment::with_prefix("DUV").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// # Errors
    ///
    /// Returns a message naming the accepted values if `log_profile` is unknown.
    pub fn profile(&self) -> Result<Profile, String> {
        self.log_profile.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
        assert_eq!(config.profile(), Ok(Profile::Development));
        assert!(!config.lenient_declaration_updates);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "port = 8088\nseed_path = \"data/seed.json\"\nrequire_crew_service_id = true"
        )
        .unwrap();

        let config = ApiConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.port, 8088);
        assert_eq!(config.seed_path, Some(PathBuf::from("data/seed.json")));
        assert!(config.require_crew_service_id);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(ApiConfig::load(Some(Path::new("/nonexistent/duv.toml"))).is_err());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let config = ApiConfig {
            log_profile: "loud".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.profile().is_err());
    }
}
