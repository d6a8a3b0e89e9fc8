//! VBA tools. The server only honours these through OLE automation on Windows.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Arguments for `excel_execute_vba`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteVbaArguments {
    /// Absolute path to the Excel file
    pub file_absolute_path: String,
    /// Sheet name in the Excel file
    pub sheet_name: String,
    /// VBA code to execute on the worksheet
    pub vba_code: String,
}

/// Arguments for `excel_add_vba_module`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddVbaModuleArguments {
    /// Absolute path to the Excel file
    pub file_absolute_path: String,
    /// Name for the VBA module
    pub module_name: String,
    /// VBA code to add to the module
    pub vba_code: String,
}
