use std::time::Duration;

use pledges_business::{FetchRecordsCommand, RecordsCompute};

use crate::{pages, state::State};

/// How often to look for the fetch result while it is in flight.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct PledgesApp {
    state: State,
}

impl PledgesApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for PledgesApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results that arrived since the last frame
        self.state.ctx.sync_computes();

        // The dataset is requested when the view is first shown
        if self
            .state
            .ctx
            .cached::<RecordsCompute>()
            .is_some_and(RecordsCompute::is_idle)
        {
            self.state.ctx.dispatch::<FetchRecordsCommand>();
        }

        self.state.ctx.run_all_dirty();

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::funded_page(&mut self.state, ui);
        });

        // Run what the widgets queued this frame
        self.state.ctx.flush_commands();
        self.state.ctx.run_all_dirty();

        if self
            .state
            .ctx
            .cached::<RecordsCompute>()
            .is_some_and(RecordsCompute::is_pending)
        {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
