use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sheetkit_core::{GridError, GridResult, SheetsApi};
use sheetkit_types::{
    BatchUpdateSpreadsheetRequest, BatchUpdateSpreadsheetResponse, Spreadsheet, ValueRange,
    ValueRenderOption,
};
use tracing::{debug, warn};

use crate::config::ClientConfig;

/// Only sheet properties are needed for lookups; skip cell data.
const SPREADSHEET_FIELDS: &str = "spreadsheetId,sheets.properties";

/// reqwest implementation of [`SheetsApi`].
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    base_url: Url,
    access_token: String,
}

/// Error envelope the service returns on failure.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl SheetsClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Config` if no access token is configured or the
    /// base URL is invalid, and `GridError::Http` if the underlying client
    /// cannot be built.
    pub fn new(config: ClientConfig) -> GridResult<Self> {
        let access_token = config
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| GridError::Config("access token is required".to_string()))?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| GridError::Config(format!("invalid base URL '{}': {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(GridError::Config(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            // Disable system proxy lookup to avoid macOS system-configuration issues
            .no_proxy()
            .build()
            .map_err(|e| GridError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            access_token,
        })
    }

    /// Build a client from `SHEETKIT_*` environment variables.
    pub fn from_env() -> GridResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// `{base}/spreadsheets/{id}/{rest...}` with each segment escaped.
    fn endpoint(&self, spreadsheet_id: &str, rest: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("spreadsheets").push(spreadsheet_id);
            segments.extend(rest);
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> GridResult<T> {
        let response = request
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| GridError::Http(e.to_string()))?;

        let body = check_status(response)
            .await?
            .text()
            .await
            .map_err(|e| GridError::Http(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}

async fn check_status(response: Response) -> GridResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|m| !m.is_empty())
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());

    warn!(status = status.as_u16(), %message, "request failed");
    Err(GridError::api(status.as_u16(), message))
}

#[async_trait]
impl SheetsApi for SheetsClient {
    async fn get_spreadsheet(&self, spreadsheet_id: &str) -> GridResult<Spreadsheet> {
        debug!(spreadsheet_id, "fetching spreadsheet metadata");
        let url = self.endpoint(spreadsheet_id, &[]);
        self.send(self.client.get(url).query(&[("fields", SPREADSHEET_FIELDS)]))
            .await
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        body: &BatchUpdateSpreadsheetRequest,
    ) -> GridResult<BatchUpdateSpreadsheetResponse> {
        debug!(
            spreadsheet_id,
            requests = body.requests.len(),
            "sending batch update"
        );
        let mut url = self.endpoint(spreadsheet_id, &[]);
        // The method suffix shares the id's path segment: `{id}:batchUpdate`.
        let path = format!("{}:batchUpdate", url.path());
        url.set_path(&path);
        self.send(self.client.post(url).json(body)).await
    }

    async fn values_get(
        &self,
        spreadsheet_id: &str,
        range: &str,
        render: ValueRenderOption,
    ) -> GridResult<ValueRange> {
        debug!(spreadsheet_id, range, render = render.as_str(), "fetching values");
        let url = self.endpoint(spreadsheet_id, &["values", range]);
        self.send(
            self.client
                .get(url)
                .query(&[("valueRenderOption", render.as_str())]),
        )
        .await
    }
}
