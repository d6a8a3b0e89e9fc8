use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ComparisonOperator;

/// Arguments for `excel_add_conditional_formatting`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalFormattingArguments {
    /// Absolute path to the Excel file
    pub file_absolute_path: String,
    /// Sheet name in the Excel file
    pub sheet_name: String,
    /// Range of cells to apply conditional formatting (e.g., "A1:A10")
    pub cell_range: String,
    /// Conditional formatting conditions including type, criteria, values, and formatting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Conditions {
    #[serde(rename = "type")]
    pub kind: ConditionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<ComparisonOperator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<String>,
    /// Formula for `expression` rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<CellFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_bar: Option<DataBar>,
}

impl Conditions {
    /// Conditions of the given type with every option unset.
    pub fn new(kind: ConditionType) -> Self {
        Self {
            kind,
            criteria: None,
            value1: None,
            value2: None,
            formula: None,
            format: None,
            color_scale: None,
            data_bar: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ConditionType {
    CellValue,
    Expression,
    ColorScale,
    DataBar,
}

/// Style applied to matching cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CellFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Hex color such as `#FFFFFF`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Point size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FillStyle {
    /// `pattern` or `gradient`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<String>,
}

/// Two- or three-point color scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorScale {
    pub min_type: ScaleBound,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    pub min_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_type: Option<ScaleBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_color: Option<String>,
    pub max_type: ScaleBound,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    pub max_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataBar {
    pub min_type: ScaleBound,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    pub max_type: ScaleBound,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_value: Option<bool>,
}

/// How a color-scale or data-bar endpoint is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ScaleBound {
    Num,
    Percent,
    Percentile,
    Formula,
    Min,
    Max,
}
