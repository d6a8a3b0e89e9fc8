//! CLI argument definitions for both binaries.
use clap::Parser;

use crate::demo::DemoMode;

/// Arguments for `excel-mcp-demo`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "excel-mcp-demo",
    version,
    about = "Print example Excel MCP Server tool invocations as JSON",
    long_about = "Print example Excel MCP Server tool invocations as JSON.\n\nBy default every data validation, conditional formatting, and VBA example is printed as Markdown with fenced JSON blocks."
)]
pub struct DemoArgs {
    /// Print only the sample-data writer example.
    #[arg(long, default_value_t = false)]
    pub sample_data: bool,
    /// Print the JSON Schema of each tool's arguments instead of examples.
    #[arg(long, default_value_t = false, conflicts_with = "sample_data")]
    pub schemas: bool,
}

impl DemoArgs {
    pub fn mode(&self) -> DemoMode {
        match (self.sample_data, self.schemas) {
            (true, _) => DemoMode::SampleData,
            (false, true) => DemoMode::Schemas,
            (false, false) => DemoMode::Features,
        }
    }
}

/// Arguments for `excel-mcp-check`. Configuration comes from the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "excel-mcp-check",
    version,
    about = "Check that the Excel MCP Server advertises its new tools",
    after_help = "Environment:\n  EXCEL_MCP_SERVER_PATH   server executable to launch\n  EXCEL_MCP_CHECK_CONFIG  TOML file with [server] and [check] sections\n  RUST_LOG                log filter for stderr diagnostics"
)]
pub struct CheckArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_defaults_to_feature_examples() {
        let args = DemoArgs::try_parse_from(["excel-mcp-demo"]).expect("parses");
        assert_eq!(args.mode(), DemoMode::Features);
    }

    #[test]
    fn sample_data_flag_selects_sample_mode() {
        let args = DemoArgs::try_parse_from(["excel-mcp-demo", "--sample-data"]).expect("parses");
        assert_eq!(args.mode(), DemoMode::SampleData);
    }

    #[test]
    fn schemas_conflict_with_sample_data() {
        let result = DemoArgs::try_parse_from(["excel-mcp-demo", "--sample-data", "--schemas"]);
        assert!(result.is_err());
    }

    #[test]
    fn check_accepts_no_operands() {
        assert!(CheckArgs::try_parse_from(["excel-mcp-check"]).is_ok());
        assert!(CheckArgs::try_parse_from(["excel-mcp-check", "extra"]).is_err());
    }
}
