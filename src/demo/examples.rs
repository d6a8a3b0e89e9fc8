//! Fixed example requests for the server's newer tools.
use crate::tools::{
    AddVbaModuleArguments, CellFormat, ColorScale, ComparisonOperator, ConditionType,
    ConditionalFormattingArguments, Conditions, DataBar, DataValidationArguments,
    DataValidationOptions, ExecuteVbaArguments, FillStyle, FontStyle, ScaleBound, ToolArguments,
    ValidationType, WriteToSheetArguments,
};

use super::ExampleRequest;

/// Workbook every example points at.
pub const EXAMPLE_WORKBOOK_PATH: &str = r"C:\temp\example.xlsx";
const EXAMPLE_SHEET: &str = "Sheet1";

const CALCULATION_MODULE_SOURCE: &str = concat!(
    "Sub CalculateTotal()\n",
    "    Dim i As Integer\n",
    "    Dim total As Double\n",
    "    total = 0\n",
    "    \n",
    "    For i = 1 To 10\n",
    "        total = total + Range(\"C\" & i).Value\n",
    "    Next i\n",
    "    \n",
    "    Range(\"C11\").Value = total\n",
    "    Range(\"C11\").Font.Bold = True\n",
    "End Sub\n",
    "\n",
    "Function MultiplyByTwo(value As Double) As Double\n",
    "    MultiplyByTwo = value * 2\n",
    "End Function",
);

const SAMPLE_SCORES: [&str; 10] = ["25", "67", "43", "89", "12", "76", "34", "91", "55", "38"];

/// Dropdown list restricting a column to High/Medium/Low.
pub fn data_validation_dropdown_example() -> ExampleRequest {
    ExampleRequest::new(ToolArguments::DataValidation(DataValidationArguments {
        file_absolute_path: EXAMPLE_WORKBOOK_PATH.into(),
        sheet_name: EXAMPLE_SHEET.into(),
        cell_range: "A1:A10".into(),
        validation_type: ValidationType::List,
        options: Some(DataValidationOptions {
            dropdown_list: Some(vec!["High".into(), "Medium".into(), "Low".into()]),
            show_input_message: Some(true),
            input_title: Some("Priority Level".into()),
            input_message: Some("Please select a priority level from the dropdown".into()),
            show_error_message: Some(true),
            error_title: Some("Invalid Priority".into()),
            error_message: Some("Please select High, Medium, or Low".into()),
            ..DataValidationOptions::default()
        }),
    }))
}

/// Whole numbers between 1 and 100.
pub fn data_validation_number_range_example() -> ExampleRequest {
    ExampleRequest::new(ToolArguments::DataValidation(DataValidationArguments {
        file_absolute_path: EXAMPLE_WORKBOOK_PATH.into(),
        sheet_name: EXAMPLE_SHEET.into(),
        cell_range: "B1:B10".into(),
        validation_type: ValidationType::Whole,
        options: Some(DataValidationOptions {
            operator: Some(ComparisonOperator::Between),
            formula1: Some("1".into()),
            formula2: Some("100".into()),
            show_input_message: Some(true),
            input_title: Some("Enter Score".into()),
            input_message: Some("Please enter a score between 1 and 100".into()),
            show_error_message: Some(true),
            error_title: Some("Invalid Score".into()),
            error_message: Some("Score must be between 1 and 100".into()),
            ..DataValidationOptions::default()
        }),
    }))
}

/// Highlight cells greater than 50.
pub fn conditional_formatting_highlight_example() -> ExampleRequest {
    let conditions = Conditions {
        criteria: Some(ComparisonOperator::GreaterThan),
        value1: Some("50".into()),
        format: Some(CellFormat {
            font: Some(FontStyle {
                bold: Some(true),
                color: Some("#FFFFFF".into()),
                ..FontStyle::default()
            }),
            fill: Some(FillStyle {
                kind: Some("pattern".into()),
                color: vec!["#FF0000".into()],
            }),
        }),
        ..Conditions::new(ConditionType::CellValue)
    };
    conditional_formatting("C1:C10", conditions)
}

pub fn conditional_formatting_color_scale_example() -> ExampleRequest {
    let conditions = Conditions {
        color_scale: Some(ColorScale {
            min_type: ScaleBound::Min,
            min_value: None,
            min_color: "#FF0000".into(),
            mid_type: None,
            mid_value: None,
            mid_color: None,
            max_type: ScaleBound::Max,
            max_value: None,
            max_color: "#00FF00".into(),
        }),
        ..Conditions::new(ConditionType::ColorScale)
    };
    conditional_formatting("D1:D10", conditions)
}

pub fn conditional_formatting_data_bars_example() -> ExampleRequest {
    let conditions = Conditions {
        data_bar: Some(DataBar {
            min_type: ScaleBound::Min,
            min_value: None,
            max_type: ScaleBound::Max,
            max_value: None,
            color: "#0000FF".into(),
            show_value: Some(true),
        }),
        ..Conditions::new(ConditionType::DataBar)
    };
    conditional_formatting("E1:E10", conditions)
}

fn conditional_formatting(cell_range: &str, conditions: Conditions) -> ExampleRequest {
    ExampleRequest::new(ToolArguments::ConditionalFormatting(
        ConditionalFormattingArguments {
            file_absolute_path: EXAMPLE_WORKBOOK_PATH.into(),
            sheet_name: EXAMPLE_SHEET.into(),
            cell_range: cell_range.into(),
            conditions: Some(conditions),
        },
    ))
}

/// One-line VBA statement (Windows OLE only).
pub fn vba_execution_example() -> ExampleRequest {
    ExampleRequest::new(ToolArguments::ExecuteVba(ExecuteVbaArguments {
        file_absolute_path: EXAMPLE_WORKBOOK_PATH.into(),
        sheet_name: EXAMPLE_SHEET.into(),
        vba_code: r#"Range("F1").Value = "Hello from VBA!""#.into(),
    }))
}

/// Module with a summing sub and a helper function (Windows OLE only).
pub fn vba_module_example() -> ExampleRequest {
    ExampleRequest::new(ToolArguments::AddVbaModule(AddVbaModuleArguments {
        file_absolute_path: EXAMPLE_WORKBOOK_PATH.into(),
        module_name: "CalculationModule".into(),
        vba_code: CALCULATION_MODULE_SOURCE.into(),
    }))
}

/// Scores in C1:C10 for the formatting examples to act on.
pub fn sample_data_example() -> ExampleRequest {
    ExampleRequest::new(ToolArguments::WriteToSheet(WriteToSheetArguments {
        file_absolute_path: EXAMPLE_WORKBOOK_PATH.into(),
        sheet_name: EXAMPLE_SHEET.into(),
        new_sheet: false,
        range: "C1:C10".into(),
        values: SAMPLE_SCORES
            .iter()
            .map(|score| vec![score.to_string()])
            .collect(),
    }))
}
