//! Batch-update bodies.

use sheetkit_types::{BatchUpdateSpreadsheetRequest, Request};

/// Wrap directives into a batch-update body.
pub fn batch_update_body(requests: impl IntoIterator<Item = Request>) -> BatchUpdateSpreadsheetRequest {
    BatchUpdateSpreadsheetRequest {
        requests: requests.into_iter().collect(),
        include_spreadsheet_in_response: None,
    }
}

/// Accumulates directives for a single batch update.
///
/// # Examples
///
/// ```
/// use sheetkit_core::{batch::BatchBuilder, format};
/// use sheetkit_types::GridRange;
///
/// let body = BatchBuilder::new()
///     .push(format::bold(GridRange::new(0, 0, 1, 0, 5), true))
///     .push(format::row_height(0, 0, 1, 32))
///     .build();
/// assert_eq!(body.requests.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchBuilder {
    requests: Vec<Request>,
    include_spreadsheet: bool,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one directive.
    #[must_use]
    pub fn push(mut self, request: Request) -> Self {
        self.requests.push(request);
        self
    }

    /// Append several directives, keeping their order.
    #[must_use]
    pub fn extend(mut self, requests: impl IntoIterator<Item = Request>) -> Self {
        self.requests.extend(requests);
        self
    }

    /// Ask the service to echo the updated spreadsheet in its response.
    #[must_use]
    pub fn include_spreadsheet(mut self, include: bool) -> Self {
        self.include_spreadsheet = include;
        self
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn build(self) -> BatchUpdateSpreadsheetRequest {
        BatchUpdateSpreadsheetRequest {
            requests: self.requests,
            include_spreadsheet_in_response: self.include_spreadsheet.then_some(true),
        }
    }
}
