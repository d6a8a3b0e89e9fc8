use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ComparisonOperator;

/// Arguments for `excel_add_data_validation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataValidationArguments {
    /// Absolute path to the Excel file
    pub file_absolute_path: String,
    /// Sheet name in the Excel file
    pub sheet_name: String,
    /// Range of cells to apply data validation (e.g., "A1:A10")
    pub cell_range: String,
    /// Type of validation
    pub validation_type: ValidationType,
    /// Data validation options including dropdownList, formulas, error messages, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<DataValidationOptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ValidationType {
    List,
    Whole,
    Decimal,
    Date,
    Time,
    TextLength,
    Custom,
}

/// Optional settings; anything left `None` is omitted from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataValidationOptions {
    /// Allowed values for `list` validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdown_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<ComparisonOperator>,
    /// Lower bound, or the single operand for one-sided operators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula1: Option<String>,
    /// Upper bound for `between` / `notBetween`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_input_message: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_error_message: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn validation_type_uses_server_spelling() {
        assert_eq!(
            serde_json::to_value(ValidationType::TextLength).expect("serializes"),
            json!("textLength")
        );
        let parsed: ValidationType = serde_json::from_value(json!("whole")).expect("parses");
        assert_eq!(parsed, ValidationType::Whole);
    }

    #[test]
    fn unset_options_are_omitted() {
        let options = DataValidationOptions {
            formula1: Some("1".into()),
            ..DataValidationOptions::default()
        };
        assert_eq!(
            serde_json::to_value(options).expect("serializes"),
            json!({ "formula1": "1" })
        );
    }
}
