use pledges_business::{
    BusinessConfig, CurrentPage, FetchRecordsCommand, FetchState, NextPageCommand, PageCompute,
    PreviousPageCommand, RecordsCompute,
};
use pledges_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        ctx.add_state(FetchState::default());
        ctx.add_state(CurrentPage::default());
        ctx.record_compute(RecordsCompute::default());
        ctx.record_compute(PageCompute::default());
        ctx.record_command(FetchRecordsCommand);
        ctx.record_command(NextPageCommand);
        ctx.record_command(PreviousPageCommand);

        if let Err(err) = ctx.verify_deps() {
            log::error!("Invalid state dependencies: {err}");
        }

        Self { ctx }
    }

    /// State that loads the dataset from `data_url`, usually a mock server.
    pub fn test(data_url: impl AsRef<str>) -> Self {
        Self::new(BusinessConfig::new(data_url))
    }
}
