//! Range descriptors.

use serde::{Deserialize, Serialize};

/// A rectangular region of one sheet.
///
/// Indices are zero-based and half-open: `start` is inclusive, `end` is
/// exclusive. An unset bound means the range is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub sheet_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_column_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column_index: Option<u32>,
}

impl GridRange {
    /// A fully bounded range.
    #[must_use]
    pub fn new(sheet_id: i64, start_row: u32, end_row: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            sheet_id,
            start_row_index: Some(start_row),
            end_row_index: Some(end_row),
            start_column_index: Some(start_col),
            end_column_index: Some(end_col),
        }
    }

    /// The whole sheet.
    #[must_use]
    pub fn whole_sheet(sheet_id: i64) -> Self {
        Self {
            sheet_id,
            ..Self::default()
        }
    }

    /// Number of rows covered, if both row bounds are set.
    #[must_use]
    pub fn row_count(&self) -> Option<u32> {
        match (self.start_row_index, self.end_row_index) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        }
    }

    /// Number of columns covered, if both column bounds are set.
    #[must_use]
    pub fn column_count(&self) -> Option<u32> {
        match (self.start_column_index, self.end_column_index) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        }
    }
}

/// A single cell position on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinate {
    pub sheet_id: i64,
    pub row_index: u32,
    pub column_index: u32,
}

/// Which axis a [`DimensionRange`] runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Rows,
    Columns,
}

/// A span of whole rows or whole columns, half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRange {
    pub sheet_id: i64,
    pub dimension: Dimension,
    pub start_index: u32,
    pub end_index: u32,
}

impl DimensionRange {
    #[must_use]
    pub fn rows(sheet_id: i64, start_index: u32, end_index: u32) -> Self {
        Self {
            sheet_id,
            dimension: Dimension::Rows,
            start_index,
            end_index,
        }
    }

    #[must_use]
    pub fn columns(sheet_id: i64, start_index: u32, end_index: u32) -> Self {
        Self {
            sheet_id,
            dimension: Dimension::Columns,
            start_index,
            end_index,
        }
    }
}
