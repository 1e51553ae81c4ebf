//! Operations issued through a recording client binding.

mod common;
use common::FakeApi;

use serde_json::json;
use sheetkit_core::lookup::SheetSelector;
use sheetkit_core::{a1, format, ops, CellInput, GridError};
use sheetkit_types::{GridRange, Request, ValueRenderOption, WrapStrategy};

#[tokio::test]
async fn test_apply_sends_one_batch() {
    let api = FakeApi::new();
    let range = GridRange::new(0, 0, 1, 0, 3);

    let response = ops::apply(
        &api,
        "sheet-1",
        vec![format::bold(range, true), format::wrap(range, WrapStrategy::Clip)],
    )
    .await
    .unwrap()
    .expect("response");

    assert_eq!(response.spreadsheet_id, "sheet-1");
    assert_eq!(response.replies.len(), 2);

    let batches = api.batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].requests.len(), 2);
}

#[tokio::test]
async fn test_apply_empty_is_noop() {
    let api = FakeApi::new();
    let response = ops::apply(&api, "sheet-1", Vec::new()).await.unwrap();
    assert!(response.is_none());
    assert!(api.batches().is_empty());
}

#[tokio::test]
async fn test_lookup_sheet_by_name_and_id() {
    let api = FakeApi::new();

    let summary = ops::lookup_sheet(&api, "sheet-1", &SheetSelector::from("Summary"))
        .await
        .unwrap();
    assert_eq!(summary.sheet_id, Some(1234));

    let data = ops::lookup_sheet(&api, "sheet-1", &SheetSelector::Id(0))
        .await
        .unwrap();
    assert_eq!(data.title.as_deref(), Some("Data"));
}

#[tokio::test]
async fn test_lookup_missing_sheet() {
    let api = FakeApi::new();
    let err = ops::lookup_sheet(&api, "sheet-1", &SheetSelector::from("Nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, GridError::SheetNotFound(_)));
}

#[tokio::test]
async fn test_sheet_id_skips_metadata_for_ids() {
    let api = FakeApi::new();
    assert_eq!(
        ops::sheet_id(&api, "sheet-1", &SheetSelector::Id(77)).await.unwrap(),
        77
    );
    assert_eq!(api.metadata_calls(), 0);

    assert_eq!(
        ops::sheet_id(&api, "sheet-1", &SheetSelector::from("Summary"))
            .await
            .unwrap(),
        1234
    );
    assert_eq!(api.metadata_calls(), 1);
}

#[tokio::test]
async fn test_read_range_passes_render_option() {
    let api = FakeApi::new().with_values("Data!A1:B2", vec![vec![json!("a"), json!(1)], vec![json!("=A1")]]);

    let rows = ops::read_range(&api, "sheet-1", "Data!A1:B2", ValueRenderOption::Formula)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], json!("=A1"));
    assert_eq!(
        api.reads(),
        vec![("Data!A1:B2".to_string(), ValueRenderOption::Formula)]
    );
}

#[tokio::test]
async fn test_read_range_empty_values() {
    let api = FakeApi::new().with_values("Data!Z1:Z9", Vec::new());
    let rows = ops::read_range(&api, "sheet-1", "Data!Z1:Z9", ValueRenderOption::default())
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_read_ranges_in_order() {
    let api = FakeApi::new()
        .with_values("Data!A1", vec![vec![json!(1)]])
        .with_values("Summary!A1", vec![vec![json!(2)]]);

    let ranges = ops::read_ranges(
        &api,
        "sheet-1",
        &["Summary!A1", "Data!A1"],
        ValueRenderOption::UnformattedValue,
    )
    .await
    .unwrap();

    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[0].range.as_deref(), Some("Summary!A1"));
    assert_eq!(ranges[1].values, vec![vec![json!(1)]]);
}

#[tokio::test]
async fn test_read_ranges_fails_on_any_error() {
    let api = FakeApi::new().with_values("Data!A1", vec![vec![json!(1)]]);
    let err = ops::read_ranges(
        &api,
        "sheet-1",
        &["Data!A1", "Bad!!"],
        ValueRenderOption::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GridError::Api { status: 400, .. }));
}

#[tokio::test]
async fn test_write_values_to_named_sheet() {
    let api = FakeApi::new();
    let rows = vec![
        vec![CellInput::from("Total"), CellInput::from("=SUM(B1:B3)")],
        vec![CellInput::from(true), CellInput::Null],
    ];

    ops::write_values_to(&api, "sheet-1", &SheetSelector::from("Summary"), 4, 1, &rows)
        .await
        .unwrap();

    let batches = api.batches();
    assert_eq!(batches.len(), 1);
    let Request::UpdateCells(update) = &batches[0].requests[0] else {
        panic!("Expected updateCells");
    };
    assert_eq!(update.range, Some(GridRange::new(1234, 4, 6, 1, 3)));
    assert_eq!(update.rows.len(), 2);
    assert_eq!(
        serde_json::to_value(&update.rows[1].values[1]).unwrap(),
        json!({"userEnteredValue": {"stringValue": ""}})
    );
}

#[tokio::test]
async fn test_write_values_past_grid_end_sends_nothing() {
    let api = FakeApi::new();
    let (row, col) = a1::parse_a1("A4294967295").unwrap();

    let rows = vec![vec![1], vec![2]];

    let err = ops::write_values_to(&api, "sheet-1", &SheetSelector::Id(0), row, col, &rows)
        .await
        .unwrap_err();

    assert!(matches!(err, GridError::InvalidRange(_)));
    assert!(api.batches().is_empty());
}
