//! Single tool invocation

use std::path::PathBuf;
use std::time::Instant;

use anysite_mcp::ToolAdapter;
use tracing::{debug, info};

use crate::cli::ConfigArgs;
use crate::error::{CliError, CliResult};
use crate::utils::read_arguments;

pub struct CallCommand;

impl CallCommand {
    /// Run `operation` through the same path `tools/call` uses and print the
    /// result text. An error result becomes [`CliError::ToolFailed`].
    pub async fn run(
        config: &ConfigArgs,
        operation: &str,
        args: Option<String>,
        args_file: Option<PathBuf>,
    ) -> CliResult<()> {
        let arguments = read_arguments(args, args_file.as_deref())?;
        debug!("Arguments: {}", arguments);

        let adapter = ToolAdapter::new(super::load_app_state(config)?);

        info!("Calling tool: {}", operation);
        let start_time = Instant::now();
        let result = adapter.call_tool(operation, Some(&arguments)).await?;
        debug!("Tool finished in {}ms", start_time.elapsed().as_millis());

        let text = result
            .content
            .iter()
            .map(|block| block.text())
            .collect::<Vec<_>>()
            .join("\n");

        if result.is_error() {
            return Err(CliError::ToolFailed(text));
        }
        println!("{}", text);
        Ok(())
    }
}
