//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "anysite",
    about = "AnySite MCP server - social and web data tools for MCP clients",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

/// Overrides for the values otherwise read from the environment
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Extra env files, consulted before ./.env and ~/.anysite-mcp.env
    #[arg(long, global = true, env = "ANYSITE_ENV_FILE", value_delimiter = ',')]
    pub env_file: Vec<PathBuf>,

    /// AnySite API access token
    #[arg(long, global = true)]
    pub access_token: Option<String>,

    /// Account id used by management operations
    #[arg(long, global = true)]
    pub account_id: Option<String>,

    /// AnySite API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Total HTTP timeout per upstream request, in seconds
    #[arg(long, global = true)]
    pub http_timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the MCP server (stdio by default)
    Serve {
        #[command(flatten)]
        args: crate::commands::ServeArgs,
    },

    /// List available tools
    Tools {
        /// Print the full tools/list payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Invoke one tool and print its result
    Call {
        /// Tool name, e.g. get_linkedin_profile
        operation: String,

        /// Arguments as a JSON object
        #[arg(long, conflicts_with = "args_file")]
        args: Option<String>,

        /// Read the arguments JSON object from a file
        #[arg(long)]
        args_file: Option<PathBuf>,
    },
}
