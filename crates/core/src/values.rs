//! Value-write payloads.

use sheetkit_types::{GridRange, Request, RowData, UpdateCellsRequest};

use crate::error::{GridError, GridResult};
use crate::value::{cell_data, CellInput};

/// The range a block of rows occupies when written at
/// (`start_row`, `start_col`).
///
/// The end row is `start_row + rows.len()`, the end column is
/// `start_col` plus the length of the longest row. Fails with
/// `InvalidRange` when either end does not fit a grid index.
pub fn grid_range_for<V>(
    sheet_id: i64,
    start_row: u32,
    start_col: u32,
    rows: &[Vec<V>],
) -> GridResult<GridRange> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let end = |start: u32, len: usize| {
        u32::try_from(len)
            .ok()
            .and_then(|len| start.checked_add(len))
    };

    let end_row = end(start_row, rows.len()).ok_or_else(|| {
        GridError::InvalidRange(format!(
            "{} rows starting at row index {start_row} exceed the grid",
            rows.len()
        ))
    })?;
    let end_col = end(start_col, width).ok_or_else(|| {
        GridError::InvalidRange(format!(
            "{width} columns starting at column index {start_col} exceed the grid"
        ))
    })?;

    Ok(GridRange::new(sheet_id, start_row, end_row, start_col, end_col))
}

/// One row entry per input row, one cell entry per input column, in order.
pub fn rows_data<V>(rows: &[Vec<V>]) -> Vec<RowData>
where
    V: Clone + Into<CellInput>,
{
    rows.iter()
        .map(|row| RowData {
            values: row.iter().cloned().map(cell_data).collect(),
        })
        .collect()
}

/// Write a block of values with its top-left corner at
/// (`start_row`, `start_col`), inferring each cell's type.
///
/// # Examples
///
/// ```
/// use sheetkit_core::values::write_values;
/// use sheetkit_core::CellInput;
/// use sheetkit_types::Request;
///
/// let rows = vec![
///     vec![CellInput::from("Total"), CellInput::from("=SUM(B2:B9)")],
/// ];
/// let Request::UpdateCells(update) = write_values(0, 9, 0, &rows).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(update.range.unwrap().end_row_index, Some(10));
/// ```
pub fn write_values<V>(
    sheet_id: i64,
    start_row: u32,
    start_col: u32,
    rows: &[Vec<V>],
) -> GridResult<Request>
where
    V: Clone + Into<CellInput>,
{
    let range = grid_range_for(sheet_id, start_row, start_col, rows)?;
    Ok(Request::UpdateCells(UpdateCellsRequest {
        rows: rows_data(rows),
        fields: "userEnteredValue".to_string(),
        start: None,
        range: Some(range),
    }))
}
