//! Settings for the Habitree command-line tools.
//!
//! Read from `~/.config/habitree/config.toml`; a missing file is not an
//! error, callers fall back to their own defaults.

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Base URL used in production when nothing else is configured.
pub const PRODUCTION_APP_URL: &str = "https://readingtree2-0.vercel.app";
/// Base URL used in development when nothing else is configured.
pub const DEVELOPMENT_APP_URL: &str = "http://localhost:3000";

const DEFAULT_CACHE_TTL_SECS: u64 = 5 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Folder the note viewer browses; `~` and `$VAR` are expanded on load.
    pub notes_path: PathBuf,
    #[serde(default)]
    pub app_url: Option<String>,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

impl Config {
    pub fn new(notes_path: impl Into<PathBuf>) -> Self {
        Self {
            notes_path: notes_path.into(),
            app_url: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }

    /// Loads the config file at the default location.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Loads `path`, returning `Ok(None)` when the file does not exist.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config file at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(expanded) = expand_path(&config.notes_path) {
            config.notes_path = expanded;
        }
        Ok(Some(config))
    }

    pub fn config_path() -> PathBuf {
        let dir = shellexpand::tilde("~/.config/habitree");
        Path::new(dir.as_ref()).join("config.toml")
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Resolves the application's public base URL from the process
    /// environment. See [`Config::resolve_app_url_with`].
    pub fn resolve_app_url(&self, production: bool) -> String {
        self.resolve_app_url_with(production, |key| std::env::var(key).ok())
    }

    /// Resolves the public base URL, first match wins:
    ///
    /// 1. `NEXT_PUBLIC_VERCEL_URL` (host only, served over https)
    /// 2. `VERCEL_URL` (host only, served over https)
    /// 3. `NEXT_PUBLIC_APP_URL`
    /// 4. `app_url` from the config file
    /// 5. the production or development default
    ///
    /// Empty variables count as unset.
    pub fn resolve_app_url_with<F>(&self, production: bool, env: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| env(key).filter(|v| !v.is_empty());

        if let Some(host) = var("NEXT_PUBLIC_VERCEL_URL").or_else(|| var("VERCEL_URL")) {
            return format!("https://{host}");
        }
        if let Some(url) = var("NEXT_PUBLIC_APP_URL") {
            return url;
        }
        if let Some(url) = self.app_url.as_ref().filter(|u| !u.is_empty()) {
            return url.clone();
        }
        if production {
            PRODUCTION_APP_URL.to_string()
        } else {
            DEVELOPMENT_APP_URL.to_string()
        }
    }
}

/// Expands `~` and environment variables; `None` if a variable is unset.
fn expand_path(path: &Path) -> Option<PathBuf> {
    shellexpand::full(&path.to_string_lossy())
        .ok()
        .map(|expanded| PathBuf::from(expanded.as_ref()))
}
