//! # sheetkit-http
//!
//! HTTP client binding for the spreadsheet service.
//!
//! [`SheetsClient`] implements [`sheetkit_core::SheetsApi`] over reqwest,
//! authenticating every call with a caller-supplied bearer token.
//! Supports HTTP/2 via ALPN negotiation with fallback to HTTP/1.1.
//!
//! # Examples
//!
//! ```no_run
//! use sheetkit_core::{ops, SheetSelector};
//! use sheetkit_http::{ClientConfig, SheetsClient};
//! use sheetkit_types::ValueRenderOption;
//!
//! # async fn run() -> sheetkit_core::GridResult<()> {
//! let client = SheetsClient::new(ClientConfig::from_env()?)?;
//! let sheet = ops::lookup_sheet(&client, "spreadsheet-id", &SheetSelector::from("Data")).await?;
//! let rows = ops::read_range(&client, "spreadsheet-id", "Data!A1:C10", ValueRenderOption::FormattedValue).await?;
//! println!("{:?}: {} rows", sheet.title, rows.len());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;

pub use client::SheetsClient;
pub use config::ClientConfig;
