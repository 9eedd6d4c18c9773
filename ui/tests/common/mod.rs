use std::time::Duration;

use egui_kittest::Harness;
use pledges_ui::PledgesApp;
use pledges_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DATA_PATH: &str = "/frontend-assignment.json";

/// Wait between frames for the mock server to answer.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, PledgesApp>,
}

impl<'a> TestCtx<'a> {
    /// App whose dataset request is answered with `response`.
    pub async fn with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(DATA_PATH))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(format!("{}{DATA_PATH}", mock_server.uri()));
        let app = PledgesApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub async fn with_records(records: serde_json::Value) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(records)).await
    }

    #[allow(unused)]
    pub fn harness_mut(&mut self) -> &mut Harness<'a, PledgesApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, PledgesApp> {
        &self.harness
    }

    #[allow(unused)]
    pub async fn received_requests(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    /// Steps frames until the dataset request has settled.
    pub async fn wait_for_load(&mut self) {
        for _ in 0..40 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(DEFAULT_NETWORK_WAIT_MS)).await;

            let settled = !self
                .harness
                .state()
                .state()
                .ctx
                .cached::<pledges_business::RecordsCompute>()
                .is_some_and(|records| records.is_idle() || records.is_pending());
            if settled {
                break;
            }
        }
        // pick up the result and render it
        self.harness.step();
        self.harness.step();
    }
}

/// `count` records numbered from 1, values as JSON strings.
#[allow(unused)]
pub fn numbered_records(count: usize) -> serde_json::Value {
    serde_json::Value::Array(
        (1..=count)
            .map(|n| {
                serde_json::json!({
                    "s.no": n.to_string(),
                    "percentage.funded": (n * 10).to_string(),
                    "amt.pledged": (n * 100).to_string(),
                })
            })
            .collect(),
    )
}
