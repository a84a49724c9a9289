pub mod call;
pub mod serve;
pub mod tools;

// Re-export command handlers
pub use call::CallCommand;
pub use serve::ServeArgs;
pub use tools::ToolsCommand;

use anysite_config::{
    ConfigLoader, ServerConfig, ACCESS_TOKEN_VAR, ACCOUNT_ID_VAR, BASE_URL_VAR, HTTP_TIMEOUT_VAR,
};
use anysite_connectors::{HttpExecutor, HttpExecutorConfig};
use anysite_mcp::AppState;
use tracing::info;

use crate::cli::ConfigArgs;
use crate::error::CliResult;

/// Loader with the CLI overrides applied: flags, then environment, then
/// `--env-file` paths, then the default env files.
pub fn config_loader(args: &ConfigArgs) -> ConfigLoader {
    let loader = args
        .env_file
        .iter()
        .fold(ConfigLoader::new(), |loader, path| loader.with_env_file(path));

    loader
        .with_default_env_files()
        .set(ACCESS_TOKEN_VAR, args.access_token.clone())
        .set(ACCOUNT_ID_VAR, args.account_id.clone())
        .set(BASE_URL_VAR, args.base_url.clone())
        .set(
            HTTP_TIMEOUT_VAR,
            args.http_timeout_secs.map(|secs| secs.to_string()),
        )
}

/// Build the shared server state around an HTTP dispatcher
pub fn app_state(config: ServerConfig) -> CliResult<AppState> {
    info!("AnySite API: {}", config.base_url);

    let executor = HttpExecutor::new(
        HttpExecutorConfig::new(config.base_url, config.credentials.access_token())
            .with_request_timeout(config.http_timeout),
    )?;
    Ok(AppState::new(executor, config.credentials))
}

pub(crate) fn load_app_state(args: &ConfigArgs) -> CliResult<AppState> {
    let config = config_loader(args).load()?;
    app_state(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn flags_override_environment() {
        let args = ConfigArgs {
            access_token: Some("flag-token".into()),
            account_id: Some("acc-1".into()),
            base_url: Some("http://localhost:8080".into()),
            http_timeout_secs: Some(120),
            ..Default::default()
        };

        let config = config_loader(&args)
            .load_with(|key| (key == ACCESS_TOKEN_VAR).then(|| "env-token".to_string()))
            .unwrap();

        assert_eq!(config.credentials.access_token(), "flag-token");
        assert_eq!(config.credentials.account_id(), Some("acc-1"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.http_timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn app_state_rejects_bad_base_url_from_flags() {
        let args = ConfigArgs {
            access_token: Some("t".into()),
            base_url: Some("not a url".into()),
            ..Default::default()
        };
        assert!(config_loader(&args).load_with(|_| None).is_err());
    }
}
