//! # sheetkit-types
//!
//! Payload types mirroring the remote spreadsheet service's schema.
//!
//! Every type here serializes to exactly the field names and nesting the
//! batch-update and values endpoints expect: camelCase keys, absent
//! optionals omitted, enum values in SCREAMING_SNAKE_CASE. None of these
//! types carry behavior beyond small constructors; building them from
//! caller arguments is the job of `sheetkit-core`.

pub mod cell;
pub mod format;
pub mod range;
pub mod request;
pub mod spreadsheet;
pub mod values;

pub use cell::{CellData, ErrorValue, ExtendedValue, RowData};
pub use format::{
    Border, BorderStyle, CellFormat, Color, HorizontalAlign, NumberFormat, NumberFormatType,
    TextFormat, VerticalAlign, WrapStrategy,
};
pub use range::{Dimension, DimensionRange, GridCoordinate, GridRange};
pub use request::{
    AutoResizeDimensionsRequest, BatchUpdateSpreadsheetRequest, BatchUpdateSpreadsheetResponse,
    DimensionProperties, RepeatCellRequest, Request, UpdateBordersRequest, UpdateCellsRequest,
    UpdateDimensionPropertiesRequest, UpdateSheetPropertiesRequest,
};
pub use spreadsheet::{GridProperties, Sheet, SheetProperties, Spreadsheet};
pub use values::{MajorDimension, ValueRange, ValueRenderOption};
