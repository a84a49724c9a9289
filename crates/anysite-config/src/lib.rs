//! Configuration loading for the AnySite MCP server
//!
//! Values are resolved once at startup from CLI overrides, the process
//! environment and optional env files, in that order of precedence.

pub mod error;
pub mod loader;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    ConfigLoader, ServerConfig, ACCESS_TOKEN_VAR, ACCOUNT_ID_VAR, BASE_URL_VAR,
    DEFAULT_BASE_URL, HTTP_TIMEOUT_VAR, USER_ENV_FILE,
};
