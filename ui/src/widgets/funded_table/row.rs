//! Row rendering for the funded table.

use egui_extras::TableRow;
use pledges_business::Record;

pub const NO_DATA_MESSAGE: &str = "No data available";

/// One record. Cells inherit the table's right-aligned layout.
#[inline]
pub fn render_record_row(row: &mut TableRow<'_, '_>, record: &Record) {
    for value in [
        &record.serial,
        &record.percentage_funded,
        &record.amount_pledged,
    ] {
        row.col(|ui| {
            ui.label(value.as_str());
        });
    }
}

/// Shown instead of records when the current page is empty.
///
/// Table columns cannot be spanned, so the message sits centered in the middle column.
#[inline]
pub fn render_placeholder_row(row: &mut TableRow<'_, '_>) {
    row.col(|_| {});
    row.col(|ui| {
        ui.centered_and_justified(|ui| {
            ui.label(NO_DATA_MESSAGE);
        });
    });
    row.col(|_| {});
}
