//! Operations that issue calls through a [`SheetsApi`].

use sheetkit_types::{
    BatchUpdateSpreadsheetResponse, Request, SheetProperties, ValueRange, ValueRenderOption,
};
use tracing::debug;

use crate::api::SheetsApi;
use crate::batch::batch_update_body;
use crate::error::{GridError, GridResult};
use crate::lookup::SheetSelector;
use crate::value::CellInput;
use crate::values::write_values;

/// Send directives as one batch update. An empty list sends nothing and
/// returns `None`.
pub async fn apply<A>(
    api: &A,
    spreadsheet_id: &str,
    requests: Vec<Request>,
) -> GridResult<Option<BatchUpdateSpreadsheetResponse>>
where
    A: SheetsApi + ?Sized,
{
    if requests.is_empty() {
        debug!(spreadsheet_id, "no requests to apply");
        return Ok(None);
    }

    debug!(spreadsheet_id, count = requests.len(), "applying batch update");
    let body = batch_update_body(requests);
    api.batch_update(spreadsheet_id, &body).await.map(Some)
}

/// Fetch spreadsheet metadata and pick one sheet from it.
pub async fn lookup_sheet<A>(
    api: &A,
    spreadsheet_id: &str,
    selector: &SheetSelector,
) -> GridResult<SheetProperties>
where
    A: SheetsApi + ?Sized,
{
    let spreadsheet = api.get_spreadsheet(spreadsheet_id).await?;
    selector.select(&spreadsheet).cloned()
}

/// Resolve a selector to a numeric sheet id.
pub async fn sheet_id<A>(api: &A, spreadsheet_id: &str, selector: &SheetSelector) -> GridResult<i64>
where
    A: SheetsApi + ?Sized,
{
    if let SheetSelector::Id(id) = selector {
        return Ok(*id);
    }
    lookup_sheet(api, spreadsheet_id, selector)
        .await?
        .sheet_id
        .ok_or_else(|| GridError::sheet_not_found(selector))
}

/// Read the values of an A1 range as rows. An empty range reads as no rows.
pub async fn read_range<A>(
    api: &A,
    spreadsheet_id: &str,
    range: &str,
    render: ValueRenderOption,
) -> GridResult<Vec<Vec<serde_json::Value>>>
where
    A: SheetsApi + ?Sized,
{
    debug!(spreadsheet_id, range, ?render, "reading range");
    Ok(api.values_get(spreadsheet_id, range, render).await?.values)
}

/// Read several ranges concurrently. Results are in input order; the first
/// failure fails the whole read.
pub async fn read_ranges<A>(
    api: &A,
    spreadsheet_id: &str,
    ranges: &[&str],
    render: ValueRenderOption,
) -> GridResult<Vec<ValueRange>>
where
    A: SheetsApi + ?Sized,
{
    let reads = ranges
        .iter()
        .map(|range| api.values_get(spreadsheet_id, range, render));

    futures::future::join_all(reads).await.into_iter().collect()
}

/// Write a block of values onto the selected sheet at (`start_row`,
/// `start_col`).
pub async fn write_values_to<A, V>(
    api: &A,
    spreadsheet_id: &str,
    selector: &SheetSelector,
    start_row: u32,
    start_col: u32,
    rows: &[Vec<V>],
) -> GridResult<Option<BatchUpdateSpreadsheetResponse>>
where
    A: SheetsApi + ?Sized,
    V: Clone + Into<CellInput>,
{
    let id = sheet_id(api, spreadsheet_id, selector).await?;
    let request = write_values(id, start_row, start_col, rows)?;
    apply(api, spreadsheet_id, vec![request]).await
}
