//! Integration tests for loading the dataset into the table.

mod common;

use crate::common::{TestCtx, numbered_records};
use kittest::Queryable;
use serde_json::json;

#[tokio::test]
async fn test_headers_render_before_data() {
    let mut ctx = TestCtx::with_records(numbered_records(3)).await;
    let harness = ctx.harness_mut();
    harness.step();

    assert!(harness.query_by_label("Percentage Funded Table").is_some());
    assert!(harness.query_by_label("Sr.No").is_some());
    assert!(harness.query_by_label("Percentage Funded").is_some());
    assert!(harness.query_by_label("Amount Pledged").is_some());
}

#[tokio::test]
async fn test_empty_dataset_shows_no_data() {
    let mut ctx = TestCtx::with_records(json!([])).await;
    ctx.wait_for_load().await;
    let harness = ctx.harness_mut();

    assert!(
        harness.query_by_label("No data available").is_some(),
        "Empty dataset should render the placeholder row"
    );
    assert!(harness.query_by_label("Page 1 of 1").is_some());
}

#[tokio::test]
async fn test_records_render_as_rows() {
    let mut ctx = TestCtx::with_records(json!([
        {"s.no": "1", "percentage.funded": "50", "amt.pledged": "500"},
        {"s.no": "2", "percentage.funded": "60", "amt.pledged": "600"},
    ]))
    .await;
    ctx.wait_for_load().await;
    let harness = ctx.harness_mut();

    for text in ["1", "50", "500", "2", "60", "600"] {
        assert!(
            harness.query_by_label(text).is_some(),
            "Cell {text} should be rendered"
        );
    }
    assert!(harness.query_by_label("No data available").is_none());
}

#[tokio::test]
async fn test_numeric_values_render_like_strings() {
    let mut ctx = TestCtx::with_records(json!([
        {"s.no": 0, "percentage.funded": 186, "amt.pledged": 15823},
    ]))
    .await;
    ctx.wait_for_load().await;
    let harness = ctx.harness_mut();

    for text in ["0", "186", "15823"] {
        assert!(
            harness.query_by_label(text).is_some(),
            "Numeric cell {text} should be rendered as text"
        );
    }
}

#[tokio::test]
async fn test_dataset_is_fetched_once() {
    let mut ctx = TestCtx::with_records(numbered_records(2)).await;
    ctx.wait_for_load().await;

    for _ in 0..10 {
        ctx.harness_mut().step();
    }

    assert_eq!(ctx.received_requests().await, 1);
}
