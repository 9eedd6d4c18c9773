//! The funded-campaigns table.
//!
//! - `header`: column labels
//! - `row`: one record, or the placeholder when the page is empty

pub mod header;
pub mod row;

use egui::{Frame, Layout, Margin, Response, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use pledges_business::{PageCompute, PageView};
use pledges_states::StateCtx;

use crate::utils::colors::TABLE_BORDER_COLOR;
use header::{COLUMN_COUNT, render_table_header};
use row::{render_placeholder_row, render_record_row};

pub const TABLE_HEADING: &str = "Percentage Funded Table";

const HEADER_HEIGHT: f32 = 28.0;
const ROW_HEIGHT: f32 = 24.0;
const MIN_COLUMN_WIDTH: f32 = 120.0;

/// Heading plus table for the current page.
pub fn funded_table(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let view = state_ctx.cached::<PageCompute>().map(PageCompute::view);

    ui.vertical(|ui| {
        ui.heading(TABLE_HEADING);
        ui.add_space(8.0);

        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::same(4))
            .show(ui, |ui| match view {
                Some(view) => render_table(ui, view),
                None => render_table(ui, &PageView::default()),
            });
    })
    .response
}

fn render_table(ui: &mut Ui, view: &PageView) {
    TableBuilder::new(ui)
        .id_salt("funded_table")
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::right_to_left(egui::Align::Center))
        .columns(Column::remainder().at_least(MIN_COLUMN_WIDTH), COLUMN_COUNT)
        .header(HEADER_HEIGHT, |mut header| render_table_header(&mut header))
        .body(|mut body| {
            if view.is_empty() {
                body.row(ROW_HEIGHT, |mut row| render_placeholder_row(&mut row));
                return;
            }
            for record in view.records() {
                body.row(ROW_HEIGHT, |mut row| render_record_row(&mut row, record));
            }
        });
}
