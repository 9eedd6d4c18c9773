use egui::{Response, Ui};
use pledges_business::RecordsCompute;

use crate::{state::State, widgets};

/// Renders the table page.
///
/// A failed load shows only the error; otherwise the table (with its
/// placeholder row while the data is on its way) and the pagination bar.
pub fn funded_page(state: &mut State, ui: &mut Ui) -> Response {
    let error = state
        .ctx
        .cached::<RecordsCompute>()
        .and_then(RecordsCompute::error_message);

    if let Some(message) = error {
        return widgets::load_error(ui, message);
    }

    ui.vertical(|ui| {
        widgets::funded_table(&state.ctx, ui);
        ui.add_space(8.0);
        widgets::pagination_controls(&mut state.ctx, ui);
    })
    .response
}
