//! Configuration service implementation.
//!
//! Resolves the [`ClientConfig`] from built-in defaults, an optional TOML file
//! (~/.config/petmap/config.toml unless a path is given), and finally the
//! `PETMAP_*` environment variables, which win over the file.

use crate::paths;
use petmap_core::config::ClientConfig;
use petmap_core::{PetMapError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

pub const ENV_API_BASE_URL: &str = "PETMAP_API_BASE_URL";
pub const ENV_MOCK_API: &str = "PETMAP_MOCK_API";
pub const ENV_MOCK_LATENCY_MS: &str = "PETMAP_MOCK_LATENCY_MS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "PETMAP_REQUEST_TIMEOUT_SECS";

/// Configuration service that resolves and caches the client configuration.
///
/// The configuration is resolved on first access and then reused, so every
/// component sees the same gateway mode for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` means the default location, which may be absent.
    path: Option<PathBuf>,
    /// Cached configuration.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config file location.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading the given config file, which must exist.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, resolving it on first access.
    pub fn get_config(&self) -> Result<ClientConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| PetMapError::config("configuration cache is poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.resolve(|key| std::env::var(key).ok())?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|_| PetMapError::config("configuration cache is poisoned"))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Resolves file then environment, using `lookup` to read variables.
    pub fn resolve<F>(&self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_file = self.load_file()?;
        apply_env_overrides(from_file, lookup)
    }

    fn load_file(&self) -> Result<ClientConfig> {
        let (path, required) = match &self.path {
            Some(path) => (path.clone(), true),
            None => (paths::config_file()?, false),
        };

        if !path.exists() {
            if required {
                return Err(PetMapError::config(format!(
                    "Configuration file not found at: {}",
                    path.display()
                )));
            }
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(ClientConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: ClientConfig = toml::from_str(&content).map_err(|e| {
            PetMapError::config(format!(
                "Failed to parse configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `PETMAP_*` overrides on top of `config`.
///
/// `PETMAP_MOCK_API` enables mock mode only when it equals `true`
/// (case-insensitive); any other value disables it.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = url.trim().to_string();
    }
    if let Some(flag) = lookup(ENV_MOCK_API) {
        config.mock_api = flag.trim().eq_ignore_ascii_case("true");
    }
    if let Some(value) = lookup(ENV_MOCK_LATENCY_MS) {
        config.mock_latency_ms = parse_u64(ENV_MOCK_LATENCY_MS, &value)?;
    }
    if let Some(value) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
        config.request_timeout_secs = parse_u64(ENV_REQUEST_TIMEOUT_SECS, &value)?;
    }
    Ok(config)
}

fn parse_u64(key: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        PetMapError::config(format!("{} must be a non-negative integer, got '{}'", key, value))
    })
}
