//! Value range types for `GET spreadsheets/{id}/values/{range}`.

use serde::{Deserialize, Serialize};

/// How values in a read-back should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueRenderOption {
    /// Values as displayed, with number formats applied.
    #[default]
    FormattedValue,
    /// Raw values; numbers stay numbers.
    UnformattedValue,
    /// Formulas instead of their results.
    Formula,
}

impl ValueRenderOption {
    /// The query-string spelling of the option.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueRenderOption::FormattedValue => "FORMATTED_VALUE",
            ValueRenderOption::UnformattedValue => "UNFORMATTED_VALUE",
            ValueRenderOption::Formula => "FORMULA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MajorDimension {
    #[default]
    Rows,
    Columns,
}

/// A block of values read from a range. Trailing empty rows and cells are
/// omitted by the service, so rows may be ragged and `values` may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<MajorDimension>,
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}
