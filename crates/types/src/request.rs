//! Batch-update request and response bodies.

use serde::{Deserialize, Serialize};

use crate::cell::{CellData, RowData};
use crate::format::Border;
use crate::range::{DimensionRange, GridCoordinate, GridRange};
use crate::spreadsheet::{SheetProperties, Spreadsheet};

/// One change directive inside a batch update.
///
/// Serializes as a single-key object naming the directive, e.g.
/// `{"repeatCell": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    UpdateCells(UpdateCellsRequest),
    RepeatCell(RepeatCellRequest),
    UpdateBorders(UpdateBordersRequest),
    UpdateDimensionProperties(UpdateDimensionPropertiesRequest),
    AutoResizeDimensions(AutoResizeDimensionsRequest),
    UpdateSheetProperties(UpdateSheetPropertiesRequest),
}

/// Write rows of cells. Exactly one of `start` and `range` should be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCellsRequest {
    pub rows: Vec<RowData>,
    pub fields: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<GridCoordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<GridRange>,
}

/// Apply one cell template to every cell of a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    pub fields: String,
}

/// Set borders around and inside a range. Unset edges are left unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBordersRequest {
    pub range: GridRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_horizontal: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_vertical: Option<Border>,
}

/// Properties of a row or column span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_by_user: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDimensionPropertiesRequest {
    pub range: DimensionRange,
    pub properties: DimensionProperties,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoResizeDimensionsRequest {
    pub dimensions: DimensionRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSheetPropertiesRequest {
    pub properties: SheetProperties,
    pub fields: String,
}

/// Body of `POST spreadsheets/{id}:batchUpdate`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateSpreadsheetRequest {
    pub requests: Vec<Request>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_spreadsheet_in_response: Option<bool>,
}

/// Response of a batch update. Replies are kept as raw JSON, one per
/// request, since most directives reply with an empty object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateSpreadsheetResponse {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub replies: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_spreadsheet: Option<Spreadsheet>,
}
