use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anysite_core::Credentials;
use tracing::debug;
use url::Url;

use crate::error::{ConfigError, ConfigResult};

pub const ACCESS_TOKEN_VAR: &str = "ANYSITE_ACCESS_TOKEN";
pub const ACCOUNT_ID_VAR: &str = "ANYSITE_ACCOUNT_ID";
pub const BASE_URL_VAR: &str = "ANYSITE_BASE_URL";
pub const HTTP_TIMEOUT_VAR: &str = "ANYSITE_HTTP_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.anysite.io";

/// Per-user env file looked up in `$HOME`.
pub const USER_ENV_FILE: &str = ".anysite-mcp.env";

/// Immutable settings shared by every invocation
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub base_url: String,
    pub credentials: Credentials,
    /// Transport-level total timeout; `None` leaves only the connect timeout.
    pub http_timeout: Option<Duration>,
}

/// Resolves a [`ServerConfig`] from overrides, environment and env files
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    env_files: Vec<PathBuf>,
    overrides: HashMap<String, String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an env file. Files added earlier take precedence; missing files
    /// are skipped.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_files.push(path.into());
        self
    }

    /// `./.env`, then `$HOME/.anysite-mcp.env`.
    pub fn with_default_env_files(mut self) -> Self {
        self.env_files.push(PathBuf::from(".env"));
        if let Some(home) = std::env::var_os("HOME") {
            self.env_files.push(Path::new(&home).join(USER_ENV_FILE));
        }
        self
    }

    /// Explicit value that beats both the environment and env files.
    pub fn set(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.overrides.insert(key.to_string(), value);
        }
        self
    }

    /// Load using the process environment.
    pub fn load(&self) -> ConfigResult<ServerConfig> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Load using `env` as the environment lookup.
    pub fn load_with<F>(&self, env: F) -> ConfigResult<ServerConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let files = self.read_env_files()?;
        let lookup = |key: &str| -> Option<String> {
            self.overrides
                .get(key)
                .cloned()
                .or_else(|| env(key))
                .or_else(|| files.get(key).cloned())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let access_token = lookup(ACCESS_TOKEN_VAR).ok_or(ConfigError::MissingAccessToken)?;
        let account_id = lookup(ACCOUNT_ID_VAR);
        let base_url = match lookup(BASE_URL_VAR) {
            Some(url) => validate_base_url(url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };
        let http_timeout = lookup(HTTP_TIMEOUT_VAR)
            .map(|raw| parse_timeout(&raw))
            .transpose()?;

        debug!(
            base_url = %base_url,
            account_id = account_id.as_deref().unwrap_or("<none>"),
            "configuration loaded"
        );

        Ok(ServerConfig {
            base_url,
            credentials: Credentials::new(access_token, account_id),
            http_timeout,
        })
    }

    fn read_env_files(&self) -> ConfigResult<HashMap<String, String>> {
        let mut values = HashMap::new();
        for path in &self.env_files {
            if !path.is_file() {
                continue;
            }
            debug!("Reading env file {}", path.display());
            let iter = dotenv::from_path_iter(path).map_err(|e| env_file_error(path, e))?;
            for item in iter {
                let (key, value) = item.map_err(|e| env_file_error(path, e))?;
                values.entry(key).or_insert(value);
            }
        }
        Ok(values)
    }
}

fn env_file_error(path: &Path, err: dotenv::Error) -> ConfigError {
    ConfigError::EnvFile {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

fn validate_base_url(raw: String) -> ConfigResult<String> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: BASE_URL_VAR.to_string(),
        value: raw.clone(),
        reason,
    };
    let url = Url::parse(&raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid("expected an absolute http(s) URL".to_string()));
    }
    Ok(raw)
}

fn parse_timeout(raw: &str) -> ConfigResult<Duration> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            key: HTTP_TIMEOUT_VAR.to_string(),
            value: raw.to_string(),
            reason: "expected a positive number of seconds".to_string(),
        }),
    }
}
