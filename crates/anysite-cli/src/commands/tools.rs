//! Tool catalog listing

use anysite_core::operations;
use anysite_mcp::tool_catalog;
use anysite_mcp_types::ListToolsResult;

use crate::error::CliResult;
use crate::utils::ColoredOutput;

pub struct ToolsCommand;

impl ToolsCommand {
    pub fn run(json: bool) -> CliResult<()> {
        if json {
            let listing = ListToolsResult {
                tools: tool_catalog(),
                next_cursor: None,
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
            return Ok(());
        }

        let width = operations().iter().map(|op| op.name.len()).max().unwrap_or(0);
        for op in operations() {
            let name = format!("{:width$}", op.name, width = width);
            let marker = if op.management { " [account]" } else { "" };
            println!(
                "{}  {}{}",
                ColoredOutput::highlight(&name),
                op.description,
                ColoredOutput::dim(marker)
            );
        }
        println!(
            "\n{}",
            ColoredOutput::dim(&format!("{} tools", operations().len()))
        );
        Ok(())
    }
}
