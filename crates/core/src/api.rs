//! The client binding the operations call through.

use async_trait::async_trait;
use sheetkit_types::{
    BatchUpdateSpreadsheetRequest, BatchUpdateSpreadsheetResponse, Spreadsheet, ValueRange,
    ValueRenderOption,
};

use crate::error::GridResult;

/// The three service endpoints sheetkit uses.
///
/// `sheetkit-http` provides the reqwest implementation; anything else that
/// can reach the service (or a test double) can implement this instead.
#[async_trait]
pub trait SheetsApi: Send + Sync {
    /// Spreadsheet metadata, including every sheet's properties.
    async fn get_spreadsheet(&self, spreadsheet_id: &str) -> GridResult<Spreadsheet>;

    /// Apply a batch of directives in one call.
    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        body: &BatchUpdateSpreadsheetRequest,
    ) -> GridResult<BatchUpdateSpreadsheetResponse>;

    /// Read the values of one A1 range.
    async fn values_get(
        &self,
        spreadsheet_id: &str,
        range: &str,
        render: ValueRenderOption,
    ) -> GridResult<ValueRange>;
}
