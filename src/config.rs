// src/config.rs
use crate::application::maintenance::{CleanupPlan, DeleteMode};
use crate::domain::site::SiteMarker;
use std::{env, fmt, time::Duration};
use thiserror::Error;

const STORE_URL_VARS: [&str; 2] = ["SUPABASE_URL", "VITE_SUPABASE_URL"];
const STORE_KEY_VARS: [&str; 2] = ["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const fn default_store_timeout() -> u64 {
    30
}

/// Connection parameters of the hosted table store.
#[derive(Clone)]
pub struct StoreConfig {
    base_url: String,
    anon_key: String,
    timeout: Duration,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("anon_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StoreConfig {
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for a non-http(s) URL or a blank key.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let base_url: String = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| ConfigError::Invalid(format!("store url '{base_url}' is invalid: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "store url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let anon_key: String = anon_key.into();
        let anon_key = anon_key.trim().to_string();
        if anon_key.is_empty() {
            return Err(ConfigError::Invalid("store anon key cannot be blank".into()));
        }

        Ok(Self {
            base_url,
            anon_key,
            timeout,
        })
    }

    /// # Errors
    /// See [`StoreConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. `SUPABASE_*` names win over
    /// their `VITE_`-prefixed counterparts shared with the front-end build.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] when the URL or key is unset, and
    /// [`ConfigError::Invalid`] for malformed values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = first_present(&lookup, &STORE_URL_VARS)
            .ok_or(ConfigError::Missing("SUPABASE_URL (or VITE_SUPABASE_URL)"))?;
        let anon_key = first_present(&lookup, &STORE_KEY_VARS)
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY (or VITE_SUPABASE_ANON_KEY)"))?;
        let timeout_secs = match lookup("STORE_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("STORE_TIMEOUT_SECS must be an integer, got '{raw}'"))
            })?,
            None => default_store_timeout(),
        };

        Self::new(base_url, anon_key, Duration::from_secs(timeout_secs))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Settings shared by the maintenance binaries.
#[derive(Debug, Clone)]
pub struct MaintenanceConfig {
    store: StoreConfig,
    marker: SiteMarker,
    delete_mode: DeleteMode,
}

impl MaintenanceConfig {
    /// Loads `.env` first, then reads the process environment.
    ///
    /// # Errors
    /// See [`MaintenanceConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    /// Store settings fail as in [`StoreConfig::from_lookup`]. A blank marker
    /// or unknown delete mode is [`ConfigError::Invalid`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = StoreConfig::from_lookup(&lookup)?;
        let marker = match lookup("SITE_CLEANUP_MARKER") {
            Some(raw) => SiteMarker::new(raw).map_err(|e| ConfigError::Invalid(e.to_string()))?,
            None => SiteMarker::default(),
        };
        let delete_mode = match lookup("SITE_CLEANUP_MODE") {
            Some(raw) => raw.parse::<DeleteMode>().map_err(ConfigError::Invalid)?,
            None => DeleteMode::default(),
        };

        Ok(Self {
            store,
            marker,
            delete_mode,
        })
    }

    #[must_use]
    pub const fn store(&self) -> &StoreConfig {
        &self.store
    }

    #[must_use]
    pub const fn marker(&self) -> &SiteMarker {
        &self.marker
    }

    #[must_use]
    pub const fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }

    #[must_use]
    pub fn cleanup_plan(&self) -> CleanupPlan {
        CleanupPlan {
            marker: self.marker.clone(),
            mode: self.delete_mode,
        }
    }
}

/// Settings of the HTTP rendering server.
#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
}

impl AppConfig {
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when `LISTEN_ADDR` is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        if listen_addr.trim().is_empty() {
            return Err(ConfigError::Invalid("LISTEN_ADDR cannot be blank".into()));
        }
        Ok(Self { listen_addr })
    }

    #[must_use]
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
}

fn first_present<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|&name| lookup(name))
        .find(|value| !value.trim().is_empty())
}
