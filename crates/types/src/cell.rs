use serde::{Deserialize, Serialize};

use crate::format::CellFormat;

/// The value of a cell as the service stores it.
///
/// Serializes as a single-key object such as `{"boolValue": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedValue {
    NumberValue(f64),
    StringValue(String),
    BoolValue(bool),
    FormulaValue(String),
    /// Only ever present in responses.
    ErrorValue(ErrorValue),
}

/// An error a cell evaluated to, e.g. `#DIV/0!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorValue {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Data about one cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_entered_value: Option<ExtendedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_entered_format: Option<CellFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_value: Option<ExtendedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
}

impl CellData {
    /// A cell carrying only a user-entered value.
    #[must_use]
    pub fn with_value(value: ExtendedValue) -> Self {
        Self {
            user_entered_value: Some(value),
            ..Self::default()
        }
    }

    /// A cell carrying only a user-entered format.
    #[must_use]
    pub fn with_format(format: CellFormat) -> Self {
        Self {
            user_entered_format: Some(format),
            ..Self::default()
        }
    }
}

/// One row of cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowData {
    #[serde(default)]
    pub values: Vec<CellData>,
}
