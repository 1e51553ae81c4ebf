//! Formatting directives.
//!
//! Each function returns one [`Request`] whose field mask names exactly
//! the properties it writes, so nothing else on the target cells changes.

use sheetkit_types::{
    AutoResizeDimensionsRequest, Border, CellData, CellFormat, Dimension, DimensionProperties,
    DimensionRange, GridProperties, GridRange, HorizontalAlign, NumberFormat, NumberFormatType,
    RepeatCellRequest, Request, SheetProperties, TextFormat, UpdateBordersRequest,
    UpdateDimensionPropertiesRequest, UpdateSheetPropertiesRequest, VerticalAlign, WrapStrategy,
};

fn repeat_format(range: GridRange, format: CellFormat, fields: &str) -> Request {
    Request::RepeatCell(RepeatCellRequest {
        range,
        cell: CellData::with_format(format),
        fields: fields.to_string(),
    })
}

/// Set how overflowing text is laid out.
pub fn wrap(range: GridRange, strategy: WrapStrategy) -> Request {
    repeat_format(
        range,
        CellFormat {
            wrap_strategy: Some(strategy),
            ..CellFormat::default()
        },
        "userEnteredFormat.wrapStrategy",
    )
}

fn dimension_size(range: DimensionRange, pixel_size: u32) -> Request {
    Request::UpdateDimensionProperties(UpdateDimensionPropertiesRequest {
        range,
        properties: DimensionProperties {
            pixel_size: Some(pixel_size),
            hidden_by_user: None,
        },
        fields: "pixelSize".to_string(),
    })
}

/// Set the height of rows `start..end` in pixels.
pub fn row_height(sheet_id: i64, start: u32, end: u32, pixels: u32) -> Request {
    dimension_size(DimensionRange::rows(sheet_id, start, end), pixels)
}

/// Set the width of columns `start..end` in pixels.
pub fn column_width(sheet_id: i64, start: u32, end: u32, pixels: u32) -> Request {
    dimension_size(DimensionRange::columns(sheet_id, start, end), pixels)
}

/// Fit rows or columns `start..end` to their content.
pub fn auto_resize(sheet_id: i64, dimension: Dimension, start: u32, end: u32) -> Request {
    Request::AutoResizeDimensions(AutoResizeDimensionsRequest {
        dimensions: DimensionRange {
            sheet_id,
            dimension,
            start_index: start,
            end_index: end,
        },
    })
}

/// Border edges to set on a range. Unset edges are left as they are.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Borders {
    pub top: Option<Border>,
    pub bottom: Option<Border>,
    pub left: Option<Border>,
    pub right: Option<Border>,
    pub inner_horizontal: Option<Border>,
    pub inner_vertical: Option<Border>,
}

impl Borders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every edge, outer and inner, with the same border
    pub fn all(border: Border) -> Self {
        Self::outline(border).with_inner(border)
    }

    /// The four outer edges
    pub fn outline(border: Border) -> Self {
        Self {
            top: Some(border),
            bottom: Some(border),
            left: Some(border),
            right: Some(border),
            ..Self::default()
        }
    }

    /// Set both inner grid lines
    #[must_use]
    pub fn with_inner(mut self, border: Border) -> Self {
        self.inner_horizontal = Some(border);
        self.inner_vertical = Some(border);
        self
    }

    #[must_use]
    pub fn with_top(mut self, border: Border) -> Self {
        self.top = Some(border);
        self
    }

    #[must_use]
    pub fn with_bottom(mut self, border: Border) -> Self {
        self.bottom = Some(border);
        self
    }

    #[must_use]
    pub fn with_left(mut self, border: Border) -> Self {
        self.left = Some(border);
        self
    }

    #[must_use]
    pub fn with_right(mut self, border: Border) -> Self {
        self.right = Some(border);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
            && self.bottom.is_none()
            && self.left.is_none()
            && self.right.is_none()
            && self.inner_horizontal.is_none()
            && self.inner_vertical.is_none()
    }
}

/// Set borders on a range.
pub fn borders(range: GridRange, borders: Borders) -> Request {
    Request::UpdateBorders(UpdateBordersRequest {
        range,
        top: borders.top,
        bottom: borders.bottom,
        left: borders.left,
        right: borders.right,
        inner_horizontal: borders.inner_horizontal,
        inner_vertical: borders.inner_vertical,
    })
}

/// Apply a number format. `None` (or an empty pattern) uses the locale
/// default for the format type.
pub fn number_format(range: GridRange, kind: NumberFormatType, pattern: Option<&str>) -> Request {
    repeat_format(
        range,
        CellFormat {
            number_format: Some(NumberFormat {
                kind,
                pattern: pattern.filter(|p| !p.is_empty()).map(str::to_string),
            }),
            ..CellFormat::default()
        },
        "userEnteredFormat.numberFormat",
    )
}

/// Set horizontal and/or vertical alignment.
///
/// Only the given alignments are masked. With neither given both are
/// masked, which resets them to the default.
pub fn alignment(
    range: GridRange,
    horizontal: Option<HorizontalAlign>,
    vertical: Option<VerticalAlign>,
) -> Request {
    let fields = match (horizontal.is_some(), vertical.is_some()) {
        (true, false) => "userEnteredFormat.horizontalAlignment",
        (false, true) => "userEnteredFormat.verticalAlignment",
        _ => "userEnteredFormat(horizontalAlignment,verticalAlignment)",
    };
    repeat_format(
        range,
        CellFormat {
            horizontal_alignment: horizontal,
            vertical_alignment: vertical,
            ..CellFormat::default()
        },
        fields,
    )
}

/// Turn bold text on or off.
pub fn bold(range: GridRange, bold: bool) -> Request {
    repeat_format(
        range,
        CellFormat {
            text_format: Some(TextFormat {
                bold: Some(bold),
                ..TextFormat::default()
            }),
            ..CellFormat::default()
        },
        "userEnteredFormat.textFormat.bold",
    )
}

/// Freeze the first `rows` rows and `columns` columns. Zero unfreezes.
pub fn freeze(sheet_id: i64, rows: u32, columns: u32) -> Request {
    Request::UpdateSheetProperties(UpdateSheetPropertiesRequest {
        properties: SheetProperties {
            sheet_id: Some(sheet_id),
            grid_properties: Some(GridProperties {
                frozen_row_count: Some(rows),
                frozen_column_count: Some(columns),
                ..GridProperties::default()
            }),
            ..SheetProperties::default()
        },
        fields: "gridProperties(frozenRowCount,frozenColumnCount)".to_string(),
    })
}

/// Change a sheet's tab title.
pub fn rename_sheet(sheet_id: i64, title: impl Into<String>) -> Request {
    Request::UpdateSheetProperties(UpdateSheetPropertiesRequest {
        properties: SheetProperties {
            sheet_id: Some(sheet_id),
            title: Some(title.into()),
            ..SheetProperties::default()
        },
        fields: "title".to_string(),
    })
}
