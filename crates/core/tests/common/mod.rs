//! Shared test double for the client binding.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use sheetkit_core::{GridError, GridResult, SheetsApi};
use sheetkit_types::{
    BatchUpdateSpreadsheetRequest, BatchUpdateSpreadsheetResponse, Spreadsheet, ValueRange,
    ValueRenderOption,
};

/// In-memory `SheetsApi` that serves fixed metadata and values and records
/// every call it receives.
#[derive(Default)]
pub struct FakeApi {
    pub spreadsheet: Spreadsheet,
    pub values: Vec<(String, Vec<Vec<serde_json::Value>>)>,
    pub batches: Mutex<Vec<BatchUpdateSpreadsheetRequest>>,
    pub reads: Mutex<Vec<(String, ValueRenderOption)>>,
    pub metadata_calls: Mutex<usize>,
}

impl FakeApi {
    /// A spreadsheet with sheets "Data" (id 0) and "Summary" (id 1234).
    pub fn new() -> Self {
        let spreadsheet = serde_json::from_value(serde_json::json!({
            "spreadsheetId": "sheet-1",
            "sheets": [
                {"properties": {"sheetId": 0, "title": "Data", "index": 0}},
                {"properties": {"sheetId": 1234, "title": "Summary", "index": 1}}
            ]
        }))
        .expect("fixture metadata");
        Self {
            spreadsheet,
            ..Self::default()
        }
    }

    pub fn with_values(mut self, range: &str, rows: Vec<Vec<serde_json::Value>>) -> Self {
        self.values.push((range.to_string(), rows));
        self
    }

    pub fn batches(&self) -> Vec<BatchUpdateSpreadsheetRequest> {
        self.batches.lock().unwrap().clone()
    }

    pub fn reads(&self) -> Vec<(String, ValueRenderOption)> {
        self.reads.lock().unwrap().clone()
    }

    pub fn metadata_calls(&self) -> usize {
        *self.metadata_calls.lock().unwrap()
    }
}

#[async_trait]
impl SheetsApi for FakeApi {
    async fn get_spreadsheet(&self, _spreadsheet_id: &str) -> GridResult<Spreadsheet> {
        *self.metadata_calls.lock().unwrap() += 1;
        Ok(self.spreadsheet.clone())
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        body: &BatchUpdateSpreadsheetRequest,
    ) -> GridResult<BatchUpdateSpreadsheetResponse> {
        self.batches.lock().unwrap().push(body.clone());
        Ok(BatchUpdateSpreadsheetResponse {
            spreadsheet_id: spreadsheet_id.to_string(),
            replies: vec![serde_json::json!({}); body.requests.len()],
            updated_spreadsheet: None,
        })
    }

    async fn values_get(
        &self,
        _spreadsheet_id: &str,
        range: &str,
        render: ValueRenderOption,
    ) -> GridResult<ValueRange> {
        self.reads.lock().unwrap().push((range.to_string(), render));
        self.values
            .iter()
            .find(|(r, _)| r == range)
            .map(|(r, rows)| ValueRange {
                range: Some(r.clone()),
                major_dimension: None,
                values: rows.clone(),
            })
            .ok_or_else(|| GridError::api(400, format!("Unable to parse range: {range}")))
    }
}
