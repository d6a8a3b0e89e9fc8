//! Argument payloads for the Excel MCP Server tools and the catalog of their schemas.

pub mod conditional_formatting;
pub mod data_validation;
pub mod sheet;
pub mod vba;

use schemars::{schema_for, JsonSchema, Schema};
use serde::{Deserialize, Serialize};

pub use conditional_formatting::{
    CellFormat, ColorScale, ConditionType, ConditionalFormattingArguments, Conditions, DataBar,
    FillStyle, FontStyle, ScaleBound,
};
pub use data_validation::{DataValidationArguments, DataValidationOptions, ValidationType};
pub use sheet::WriteToSheetArguments;
pub use vba::{AddVbaModuleArguments, ExecuteVbaArguments};

pub const ADD_DATA_VALIDATION: &str = "excel_add_data_validation";
pub const ADD_CONDITIONAL_FORMATTING: &str = "excel_add_conditional_formatting";
pub const EXECUTE_VBA: &str = "excel_execute_vba";
pub const ADD_VBA_MODULE: &str = "excel_add_vba_module";
pub const WRITE_TO_SHEET: &str = "excel_write_to_sheet";

/// Comparison used by validation operators and cell-value formatting criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonOperator {
    Between,
    NotBetween,
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

/// Arguments of any supported tool. Serializes as the bare argument object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolArguments {
    DataValidation(DataValidationArguments),
    ConditionalFormatting(ConditionalFormattingArguments),
    ExecuteVba(ExecuteVbaArguments),
    AddVbaModule(AddVbaModuleArguments),
    WriteToSheet(WriteToSheetArguments),
}

impl ToolArguments {
    /// Name of the tool these arguments belong to.
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolArguments::DataValidation(_) => ADD_DATA_VALIDATION,
            ToolArguments::ConditionalFormatting(_) => ADD_CONDITIONAL_FORMATTING,
            ToolArguments::ExecuteVba(_) => EXECUTE_VBA,
            ToolArguments::AddVbaModule(_) => ADD_VBA_MODULE,
            ToolArguments::WriteToSheet(_) => WRITE_TO_SHEET,
        }
    }
}

/// Static description of a server tool.
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    schema: fn() -> Schema,
}

impl ToolDescriptor {
    pub fn argument_schema(&self) -> Schema {
        (self.schema)()
    }
}

/// Tools the examples exercise, in presentation order.
pub const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: ADD_DATA_VALIDATION,
        description: "Add data validation (including dropdown lists) to Excel cells",
        schema: schema_of::<DataValidationArguments>,
    },
    ToolDescriptor {
        name: ADD_CONDITIONAL_FORMATTING,
        description: "Add conditional formatting to Excel cells",
        schema: schema_of::<ConditionalFormattingArguments>,
    },
    ToolDescriptor {
        name: EXECUTE_VBA,
        description: "Execute VBA code on an Excel worksheet",
        schema: schema_of::<ExecuteVbaArguments>,
    },
    ToolDescriptor {
        name: ADD_VBA_MODULE,
        description: "Add a VBA module to an Excel workbook",
        schema: schema_of::<AddVbaModuleArguments>,
    },
    ToolDescriptor {
        name: WRITE_TO_SHEET,
        description: "Write values to the Excel sheet",
        schema: schema_of::<WriteToSheetArguments>,
    },
];

fn schema_of<T: JsonSchema>() -> Schema {
    schema_for!(T)
}

pub fn find_tool(name: &str) -> Option<&'static ToolDescriptor> {
    TOOL_CATALOG.iter().find(|tool| tool.name == name)
}
