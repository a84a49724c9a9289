//! MCP server command

use clap::Args;
use tracing::info;

use anysite_mcp::{serve_http, serve_stdio};

use crate::cli::ConfigArgs;
use crate::error::CliResult;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Serve over stdio (the default)
    #[arg(long, conflicts_with = "http")]
    pub stdio: bool,

    /// Serve over HTTP on this address, e.g. 127.0.0.1:8787
    #[arg(long)]
    pub http: Option<String>,
}

pub async fn execute(args: ServeArgs, config: &ConfigArgs) -> CliResult<()> {
    let app_state = super::load_app_state(config)?;

    match args.http {
        Some(addr) => serve_http(app_state, &addr).await?,
        None => {
            if !args.stdio {
                info!("No transport specified, defaulting to stdio");
            }
            serve_stdio(app_state).await?
        }
    }

    Ok(())
}
