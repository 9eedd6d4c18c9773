//! Loading the dataset.
//!
//! The request is a side effect, so it lives in [`FetchRecordsCommand`] which
//! the app dispatches once on its first frame. The command writes its outcome
//! into [`RecordsCompute`], a compute-shaped cache that never derives anything
//! on its own.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use pledges_states::{Command, Compute, Dep, Key, Updater, assign_impl};

use crate::{BusinessConfig, FetchState, LoadError, Record};

#[derive(Debug, Clone, Default)]
pub enum RecordsResult {
    /// Nothing requested yet.
    #[default]
    Idle,
    Pending,
    Loaded {
        records: Vec<Record>,
        fetched_at: DateTime<Utc>,
    },
    Failed(LoadError),
}

#[derive(Debug, Default)]
pub struct RecordsCompute {
    pub result: RecordsResult,
}

impl RecordsCompute {
    pub fn loaded(records: Vec<Record>) -> Self {
        Self {
            result: RecordsResult::Loaded {
                records,
                fetched_at: Utc::now(),
            },
        }
    }

    pub fn failed(error: LoadError) -> Self {
        Self {
            result: RecordsResult::Failed(error),
        }
    }

    /// The loaded records, empty until a load succeeds.
    pub fn records(&self) -> &[Record] {
        match &self.result {
            RecordsResult::Loaded { records, .. } => records,
            _ => &[],
        }
    }

    /// When the current records arrived.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match &self.result {
            RecordsResult::Loaded { fetched_at, .. } => Some(*fetched_at),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.result {
            RecordsResult::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// What the user sees when the load failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error().map(LoadError::user_message)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.result, RecordsResult::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, RecordsResult::Pending)
    }
}

impl Compute for RecordsCompute {
    fn deps(&self) -> Vec<Key> {
        Vec::new()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // updated by FetchRecordsCommand only
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Turns a finished HTTP exchange into records.
///
/// A `null` body is an empty dataset.
pub fn decode_records(response: &ehttp::Response) -> Result<Vec<Record>, LoadError> {
    if !response.ok {
        return Err(LoadError::Status {
            status: response.status,
            status_text: response.status_text.clone(),
        });
    }

    serde_json::from_slice::<Option<Vec<Record>>>(&response.bytes)
        .map(Option::unwrap_or_default)
        .map_err(|err| LoadError::Decode(err.to_string()))
}

/// Fetches the dataset. Runs at most once per app; later dispatches are ignored.
#[derive(Debug, Default)]
pub struct FetchRecordsCommand;

impl Command for FetchRecordsCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let (records, config, fetcher) = match (
            deps.compute::<RecordsCompute>(),
            deps.state::<BusinessConfig>(),
            deps.state::<FetchState>(),
        ) {
            (Ok(records), Ok(config), Ok(fetcher)) => (records, config, fetcher),
            (records, config, fetcher) => {
                let missing = [
                    records.err().map(|e| e.to_string()),
                    config.err().map(|e| e.to_string()),
                    fetcher.err().map(|e| e.to_string()),
                ];
                error!(
                    "FetchRecordsCommand: context is incomplete: {:?}",
                    missing.iter().flatten().collect::<Vec<_>>()
                );
                return;
            }
        };

        if !records.is_idle() {
            warn!("FetchRecordsCommand: dataset already requested, ignoring");
            return;
        }

        let url = config.data_url();
        info!("FetchRecordsCommand: fetching dataset from {url}");
        updater.set(RecordsCompute {
            result: RecordsResult::Pending,
        });

        let request = ehttp::Request::get(url.as_str());
        fetcher.inner.fetch(
            request,
            Box::new(move |result| {
                let outcome = result
                    .map_err(LoadError::Request)
                    .and_then(|response| decode_records(&response));

                let compute = match outcome {
                    Ok(records) => {
                        let compute = RecordsCompute::loaded(records);
                        if let Some(fetched_at) = compute.fetched_at() {
                            info!(
                                "FetchRecordsCommand: loaded {} records from {url} at {}",
                                compute.records().len(),
                                fetched_at.to_rfc3339()
                            );
                        }
                        compute
                    }
                    Err(err) => {
                        error!("FetchRecordsCommand: {err}");
                        RecordsCompute::failed(err)
                    }
                };
                updater.set(compute);
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LOAD_ERROR_MESSAGE, MockFetcher};
    use pledges_states::StateCtx;
    use serde_json::json;

    fn ctx_with(fetcher: MockFetcher) -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::new("http://dataset.test/records.json"));
        ctx.add_state(FetchState::new(fetcher));
        ctx.record_compute(RecordsCompute::default());
        ctx.record_command(FetchRecordsCommand);
        ctx
    }

    #[test]
    fn starts_idle() {
        let ctx = ctx_with(MockFetcher::json(&json!([])));
        let records = ctx.cached::<RecordsCompute>().unwrap();
        assert!(records.is_idle());
        assert!(records.records().is_empty());
        assert!(records.error_message().is_none());
        assert!(records.fetched_at().is_none());
    }

    #[test]
    fn loads_records() {
        let mut ctx = ctx_with(MockFetcher::json(&json!([
            {"s.no": 0, "percentage.funded": 186, "amt.pledged": 15823},
            {"s.no": 1, "percentage.funded": 8, "amt.pledged": 6859},
        ])));

        ctx.dispatch::<FetchRecordsCommand>();

        let records = ctx.cached::<RecordsCompute>().unwrap();
        assert_eq!(
            records.records(),
            &[
                Record::new("0", "186", "15823"),
                Record::new("1", "8", "6859")
            ]
        );
        assert!(records.error_message().is_none());
        assert!(
            records.fetched_at().is_some_and(|at| at <= Utc::now()),
            "a successful load records when it happened"
        );
    }

    #[test]
    fn null_body_is_an_empty_dataset() {
        let mut ctx = ctx_with(MockFetcher::ok(200, "null"));
        ctx.dispatch::<FetchRecordsCommand>();

        let records = ctx.cached::<RecordsCompute>().unwrap();
        assert!(matches!(records.result, RecordsResult::Loaded { .. }));
        assert!(records.records().is_empty());
    }

    #[test]
    fn transport_error_fails_with_fixed_message() {
        let mut ctx = ctx_with(MockFetcher::err("connection refused"));
        ctx.dispatch::<FetchRecordsCommand>();

        let records = ctx.cached::<RecordsCompute>().unwrap();
        assert_eq!(
            records.error(),
            Some(&LoadError::Request("connection refused".to_string()))
        );
        assert_eq!(records.error_message(), Some(LOAD_ERROR_MESSAGE));
        assert!(records.records().is_empty());
        assert!(records.fetched_at().is_none());
    }

    #[test]
    fn error_status_fails() {
        let mut ctx = ctx_with(MockFetcher::ok(404, "Not Found"));
        ctx.dispatch::<FetchRecordsCommand>();

        let records = ctx.cached::<RecordsCompute>().unwrap();
        assert!(matches!(
            records.error(),
            Some(LoadError::Status { status: 404, .. })
        ));
        assert_eq!(records.error_message(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn malformed_json_fails() {
        let mut ctx = ctx_with(MockFetcher::ok(200, "{\"not\": \"an array\"}"));
        ctx.dispatch::<FetchRecordsCommand>();

        let records = ctx.cached::<RecordsCompute>().unwrap();
        assert!(matches!(records.error(), Some(LoadError::Decode(_))));
    }

    #[test]
    fn fetches_only_once() {
        let fetcher = std::sync::Arc::new(MockFetcher::json(&json!([
            {"s.no": 0, "percentage.funded": 1, "amt.pledged": 2}
        ])));

        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::new("http://dataset.test/records.json"));
        ctx.add_state(FetchState {
            inner: fetcher.clone(),
        });
        ctx.record_compute(RecordsCompute::default());
        ctx.record_command(FetchRecordsCommand);

        ctx.dispatch::<FetchRecordsCommand>();
        ctx.dispatch::<FetchRecordsCommand>();

        assert_eq!(
            fetcher.requested(),
            vec!["http://dataset.test/records.json".to_string()]
        );
        assert_eq!(ctx.cached::<RecordsCompute>().unwrap().records().len(), 1);
    }

    #[test]
    fn decode_rejects_non_success_even_with_valid_body() {
        let response = ehttp::Response {
            url: String::new(),
            ok: false,
            status: 500,
            status_text: "Internal Server Error".to_string(),
            headers: ehttp::Headers::new(&[]),
            bytes: b"[]".to_vec(),
        };

        assert_eq!(
            decode_records(&response),
            Err(LoadError::Status {
                status: 500,
                status_text: "Internal Server Error".to_string()
            })
        );
    }
}
