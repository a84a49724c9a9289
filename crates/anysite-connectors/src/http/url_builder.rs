//! URL building utilities for the HTTP dispatcher

use crate::error::{ConnectorError, ConnectorResult};
use url::Url;

/// URL builder that joins the configured base URL with endpoint paths
pub struct UrlBuilder;

impl UrlBuilder {
    /// Append `path` to `base_url`, keeping any path prefix the base carries.
    ///
    /// Examples:
    /// - `join("https://api.anysite.io", "/api/google/search")` -> `https://api.anysite.io/api/google/search`
    /// - `join("https://api.anysite.io/", "api/google/search")` -> `https://api.anysite.io/api/google/search`
    /// - `join("http://proxy.local/anysite", "/api/google/search")` -> `http://proxy.local/anysite/api/google/search`
    pub fn join(base_url: &str, path: &str) -> ConnectorResult<String> {
        let base = Self::validate_base_url(base_url)?;

        let prefix = base.as_str().trim_end_matches('/');
        let suffix = path.trim_start_matches('/');
        let joined = if suffix.is_empty() {
            prefix.to_string()
        } else {
            format!("{}/{}", prefix, suffix)
        };

        Url::parse(&joined).map(|u| u.to_string()).map_err(|e| {
            ConnectorError::InvalidConfig(format!(
                "Failed to join URL '{}' with path '{}': {}",
                base_url, path, e
            ))
        })
    }

    /// Validate that a base URL is an absolute http(s) URL without query or fragment
    pub fn validate_base_url(base_url: &str) -> ConnectorResult<Url> {
        let url = Url::parse(base_url).map_err(|e| {
            ConnectorError::InvalidConfig(format!("Invalid base URL '{}': {}", base_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConnectorError::InvalidConfig(format!(
                    "Unsupported URL scheme '{}' in '{}', expected http or https",
                    scheme, base_url
                )))
            }
        }

        if url.host_str().is_none() {
            return Err(ConnectorError::InvalidConfig(format!(
                "Base URL '{}' has no host",
                base_url
            )));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConnectorError::InvalidConfig(format!(
                "Base URL '{}' must not carry a query or fragment",
                base_url
            )));
        }

        Ok(url)
    }
}
