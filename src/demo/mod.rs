//! Example tool invocations for the Excel MCP Server, ready to paste into an MCP client.

mod examples;
mod render;

use std::io::{self, Write};

use serde::Serialize;

use crate::tools::ToolArguments;

pub use examples::{
    conditional_formatting_color_scale_example, conditional_formatting_data_bars_example,
    conditional_formatting_highlight_example, data_validation_dropdown_example,
    data_validation_number_range_example, sample_data_example, vba_execution_example,
    vba_module_example, EXAMPLE_WORKBOOK_PATH,
};
pub use render::{
    render_argument_schemas, render_examples, render_sample_data, FEATURES_HEADER,
    SAMPLE_DATA_HEADER,
};

/// A tool name plus the arguments to call it with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleRequest {
    pub tool: &'static str,
    pub arguments: ToolArguments,
}

impl ExampleRequest {
    pub fn new(arguments: ToolArguments) -> Self {
        Self {
            tool: arguments.tool_name(),
            arguments,
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone)]
pub struct TitledExample {
    pub title: &'static str,
    pub request: ExampleRequest,
}

/// What the demo CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoMode {
    Features,
    SampleData,
    Schemas,
}

/// The seven feature examples in presentation order.
pub fn feature_examples() -> Vec<TitledExample> {
    let builders: [(&'static str, fn() -> ExampleRequest); 7] = [
        (
            "Data Validation - Dropdown List",
            data_validation_dropdown_example,
        ),
        (
            "Data Validation - Number Range",
            data_validation_number_range_example,
        ),
        (
            "Conditional Formatting - Highlight",
            conditional_formatting_highlight_example,
        ),
        (
            "Conditional Formatting - Color Scale",
            conditional_formatting_color_scale_example,
        ),
        (
            "Conditional Formatting - Data Bars",
            conditional_formatting_data_bars_example,
        ),
        ("VBA Execution", vba_execution_example),
        ("VBA Module Addition", vba_module_example),
    ];

    builders
        .into_iter()
        .map(|(title, build)| TitledExample {
            title,
            request: build(),
        })
        .collect()
}

pub fn run_demo(mode: DemoMode, out: &mut impl Write) -> io::Result<()> {
    match mode {
        DemoMode::Features => render_examples(out),
        DemoMode::SampleData => render_sample_data(out),
        DemoMode::Schemas => render_argument_schemas(out),
    }
}
