use std::io::{self, Write};

use crate::tools::TOOL_CATALOG;

use super::{feature_examples, sample_data_example};

pub const FEATURES_HEADER: &str = "Excel MCP Server - New Features Examples";
pub const SAMPLE_DATA_HEADER: &str = "Sample Data Creation Example:";
const SCHEMAS_HEADER: &str = "Excel MCP Server - Tool Argument Schemas";
const RULE_WIDTH: usize = 50;

/// Write every feature example as a Markdown section with a fenced JSON block.
pub fn render_examples(out: &mut impl Write) -> io::Result<()> {
    write_banner(out, FEATURES_HEADER)?;
    for example in feature_examples() {
        writeln!(out, "## {}", example.title)?;
        writeln!(out)?;
        write_json_block(out, &example.request)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write the sample-data example without Markdown decoration.
pub fn render_sample_data(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{SAMPLE_DATA_HEADER}")?;
    serde_json::to_writer_pretty(&mut *out, &sample_data_example())?;
    writeln!(out)
}

/// Write the JSON Schema of each catalogued tool's arguments.
pub fn render_argument_schemas(out: &mut impl Write) -> io::Result<()> {
    write_banner(out, SCHEMAS_HEADER)?;
    for tool in TOOL_CATALOG {
        writeln!(out, "## {}", tool.name)?;
        writeln!(out)?;
        writeln!(out, "{}", tool.description)?;
        writeln!(out)?;
        write_json_block(out, &tool.argument_schema())?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)
}

fn write_json_block(out: &mut impl Write, value: &impl serde::Serialize) -> io::Result<()> {
    writeln!(out, "```json")?;
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    writeln!(out, "```")
}
