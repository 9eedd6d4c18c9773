use egui::{Response, Ui};

use crate::utils::colors::COLOR_RED;

/// Replaces the whole table when the dataset could not be loaded.
pub fn load_error(ui: &mut Ui, message: &str) -> Response {
    ui.colored_label(COLOR_RED, message)
}
