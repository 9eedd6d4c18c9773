use std::fmt::Debug;

use ehttp::{Request, Response, Result};

pub type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

/// Where HTTP requests go. Swapped for a mock in tests.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockFetcher;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Answers every request synchronously with a canned result.
    #[derive(Debug, Default)]
    pub struct MockFetcher {
        response: Option<Result<Response>>,
        requested: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        pub fn ok(status: u16, body: impl Into<Vec<u8>>) -> Self {
            Self {
                response: Some(Ok(Response {
                    url: String::new(),
                    ok: (200..300).contains(&status),
                    status,
                    status_text: String::new(),
                    headers: ehttp::Headers::new(&[]),
                    bytes: body.into(),
                })),
                requested: Mutex::default(),
            }
        }

        pub fn json(body: &serde_json::Value) -> Self {
            Self::ok(200, body.to_string())
        }

        pub fn err(message: impl Into<String>) -> Self {
            Self {
                response: Some(Err(message.into())),
                requested: Mutex::default(),
            }
        }

        /// URLs requested so far.
        pub fn requested(&self) -> Vec<String> {
            self.requested
                .lock()
                .map(|urls| urls.clone())
                .unwrap_or_default()
        }
    }

    impl FetchService for MockFetcher {
        fn fetch(&self, request: Request, on_done: OnDone) {
            if let Ok(mut urls) = self.requested.lock() {
                urls.push(request.url.clone());
            }
            match &self.response {
                Some(response) => on_done(response.clone()),
                None => on_done(Err("MockFetcher: no response set".to_string())),
            }
        }
    }
}
