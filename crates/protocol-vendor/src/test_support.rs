use std::collections::HashMap;
use std::sync::Mutex;

use crate::{FetchError, FetchResult, Fetcher};

/// In-memory fetcher for tests. Serves canned responses keyed by URL and
/// records every URL it was asked for, in order.
///
/// URLs without a canned response answer with an empty 404.
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Result<FetchResult, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_response(url, FetchResult::ok(body))
    }

    pub fn with_response(mut self, url: impl Into<String>, response: FetchResult) -> Self {
        self.responses.insert(url.into(), Ok(response));
        self
    }

    pub fn with_transport_error(mut self, url: impl Into<String>, message: &str) -> Self {
        self.responses
            .insert(url.into(), Err(FetchError::Transport(message.to_owned())));
        self
    }

    /// URLs requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        self.requests.lock().unwrap().push(url.to_owned());

        self.responses.get(url).cloned().unwrap_or_else(|| {
            Ok(FetchResult {
                status: 404,
                redirect_target: None,
                body: String::new(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_canned_body() {
        let fetcher = StaticFetcher::new().with_body("https://a.test/x", "X");
        let result = fetcher.fetch("https://a.test/x").await.unwrap();
        assert_eq!(result, FetchResult::ok("X"));
    }

    #[tokio::test]
    async fn unknown_url_is_not_found() {
        let fetcher = StaticFetcher::new();
        let result = fetcher.fetch("https://a.test/missing").await.unwrap();
        assert_eq!(result.status, 404);
        assert!(result.body.is_empty());
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let fetcher = StaticFetcher::new()
            .with_transport_error("https://a.test/broken", "reset");
        let _ = fetcher.fetch("https://a.test/one").await;
        let _ = fetcher.fetch("https://a.test/broken").await;
        assert_eq!(
            fetcher.requests(),
            vec!["https://a.test/one", "https://a.test/broken"]
        );
    }

    #[test]
    #[should_panic]
    fn poisoned_request_log_is_not_hidden() {
        let fetcher = std::sync::Arc::new(StaticFetcher::new());
        let poisoner = std::sync::Arc::clone(&fetcher);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.requests.lock().unwrap();
            panic!("poison the request log");
        })
        .join();

        fetcher.requests();
    }
}
