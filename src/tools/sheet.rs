use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Arguments for `excel_write_to_sheet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WriteToSheetArguments {
    /// Absolute path to the Excel file
    pub file_absolute_path: String,
    /// Sheet name in the Excel file
    pub sheet_name: String,
    /// Create the sheet instead of writing into an existing one
    pub new_sheet: bool,
    /// Target range (e.g., "C1:C10"); its shape must match `values`
    pub range: String,
    /// Row-major cell values
    pub values: Vec<Vec<String>>,
}
