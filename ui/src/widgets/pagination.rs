//! Previous / Next controls under the table.

use egui::{Button, Response, Ui};
use pledges_business::{NextPageCommand, PageCompute, PreviousPageCommand};
use pledges_states::StateCtx;

pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";

/// Renders the controls and queues a page command when one is clicked.
///
/// Buttons are disabled at either end instead of wrapping around.
pub fn pagination_controls(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let (label, can_previous, can_next) = state_ctx
        .cached::<PageCompute>()
        .map(|compute| {
            let view = compute.view();
            (view.label(), view.can_previous(), view.can_next())
        })
        .unwrap_or_else(|| ("Page 1 of 1".to_string(), false, false));

    let mut previous_clicked = false;
    let mut next_clicked = false;

    let response = ui
        .horizontal(|ui| {
            previous_clicked = ui
                .add_enabled(can_previous, Button::new(PREVIOUS_LABEL))
                .clicked();
            ui.label(label);
            next_clicked = ui.add_enabled(can_next, Button::new(NEXT_LABEL)).clicked();
        })
        .response;

    if previous_clicked {
        state_ctx.enqueue_command::<PreviousPageCommand>();
    }
    if next_clicked {
        state_ctx.enqueue_command::<NextPageCommand>();
    }
    if previous_clicked || next_clicked {
        // the new page is only known after the queue is flushed at the end of this frame
        ui.ctx().request_repaint();
    }

    response
}
