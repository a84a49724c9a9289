//! AnySite CLI main entry point

use anysite_cli::{
    cli::{Cli, Commands},
    commands::{serve, CallCommand, ToolsCommand},
    error::CliResult,
    utils::{init_tracing, ColoredOutput},
};
use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", ColoredOutput::error("Error:"), e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Disable colored output if requested
    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose, !cli.no_color)?;

    debug!("AnySite CLI v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve { args } => serve::execute(args, &cli.config).await,
        Commands::Tools { json } => ToolsCommand::run(json),
        Commands::Call {
            operation,
            args,
            args_file,
        } => CallCommand::run(&cli.config, &operation, args, args_file).await,
    }
}
