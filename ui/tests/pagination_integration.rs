//! Integration tests for paging through the loaded dataset.

mod common;

use crate::common::{TestCtx, numbered_records};
use egui_kittest::Harness;
use kittest::{NodeT as _, Queryable};
use pledges_ui::PledgesApp;

fn assert_enabled(harness: &Harness<'_, PledgesApp>, previous: bool, next: bool) {
    assert_eq!(
        !harness.get_by_label("Previous").accesskit_node().is_disabled(),
        previous,
        "Previous enabled should be {previous}"
    );
    assert_eq!(
        !harness.get_by_label("Next").accesskit_node().is_disabled(),
        next,
        "Next enabled should be {next}"
    );
}

#[tokio::test]
async fn test_eight_records_make_two_pages() {
    let mut ctx = TestCtx::with_records(numbered_records(8)).await;
    ctx.wait_for_load().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("Page 1 of 2").is_some());
    assert!(harness.query_by_label("1").is_some());
    assert!(harness.query_by_label("5").is_some());
    assert!(harness.query_by_label("6").is_none());
    assert_enabled(harness, false, true);

    harness.get_by_label("Next").click();
    harness.step();
    harness.step();

    assert!(
        harness.query_by_label("Page 2 of 2").is_some(),
        "Next should move to the second page"
    );
    for serial in ["6", "7", "8"] {
        assert!(
            harness.query_by_label(serial).is_some(),
            "Record {serial} should be on page 2"
        );
    }
    assert!(harness.query_by_label("1").is_none());
    assert_enabled(harness, true, false);
}

#[tokio::test]
async fn test_previous_returns_to_first_page() {
    let mut ctx = TestCtx::with_records(numbered_records(8)).await;
    ctx.wait_for_load().await;
    let harness = ctx.harness_mut();

    harness.get_by_label("Next").click();
    harness.step();
    harness.step();
    assert!(harness.query_by_label("Page 2 of 2").is_some());

    harness.get_by_label("Previous").click();
    harness.step();
    harness.step();
    assert!(harness.query_by_label("Page 1 of 2").is_some());
    assert!(harness.query_by_label("1").is_some());
}

#[tokio::test]
async fn test_single_page_controls_do_nothing() {
    let mut ctx = TestCtx::with_records(numbered_records(5)).await;
    ctx.wait_for_load().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("Page 1 of 1").is_some());
    assert_enabled(harness, false, false);

    harness.get_by_label("Next").click();
    harness.step();
    harness.step();
    harness.get_by_label("Previous").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label("Page 1 of 1").is_some());
    assert!(harness.query_by_label("5").is_some());
}

#[tokio::test]
async fn test_page_counter_stays_in_bounds() {
    let mut ctx = TestCtx::with_records(numbered_records(12)).await;
    ctx.wait_for_load().await;
    let harness = ctx.harness_mut();

    for _ in 0..5 {
        harness.get_by_label("Next").click();
        harness.step();
        harness.step();
    }
    assert!(harness.query_by_label("Page 3 of 3").is_some());
    assert!(harness.query_by_label("11").is_some());
    assert!(harness.query_by_label("12").is_some());

    for _ in 0..5 {
        harness.get_by_label("Previous").click();
        harness.step();
        harness.step();
    }
    assert!(harness.query_by_label("Page 1 of 3").is_some());
}
