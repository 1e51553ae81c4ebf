//! # sheetkit-core
//!
//! Request builders and operations for a remote spreadsheet service.
//!
//! This crate provides:
//! - Value type inference for cell writes
//! - Formatting and value-write directives
//! - Batch-update bodies
//! - Sheet lookup by name or id
//! - The [`SheetsApi`] client binding and the operations that use it
//!
//! # Examples
//!
//! ```
//! use sheetkit_core::{a1, batch::BatchBuilder, format, values};
//! use sheetkit_types::{Border, HorizontalAlign};
//!
//! let header = a1::grid_range_from_a1(0, "A1:C1").unwrap();
//! let body = BatchBuilder::new()
//!     .push(values::write_values(0, 0, 0, &[vec!["Name", "Qty", "Price"]]).unwrap())
//!     .push(format::bold(header, true))
//!     .push(format::alignment(header, Some(HorizontalAlign::Center), None))
//!     .push(format::borders(header, format::Borders::outline(Border::solid())))
//!     .build();
//!
//! assert_eq!(body.requests.len(), 4);
//! ```

/// A1 notation parsing.
pub mod a1;
/// Client binding trait.
pub mod api;
/// Batch-update bodies.
pub mod batch;
/// Error types and result aliases.
pub mod error;
/// Formatting directives.
pub mod format;
/// Sheet lookup.
pub mod lookup;
/// Operations over a client binding.
pub mod ops;
/// Cell input values and type inference.
pub mod value;
/// Value-write payloads.
pub mod values;

pub use api::SheetsApi;
pub use error::{GridError, GridResult};
pub use lookup::SheetSelector;
pub use value::{CellInput, ValueKind};
