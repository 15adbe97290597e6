use std::time::Duration;

use protocol_vendor::{FetchError, FetchResult, Fetcher};
use reqwest::header::LOCATION;

const USER_AGENT: &str = "protocol-vendor";

/// HTTP transport for vendoring runs.
///
/// Redirects are not followed; the `Location` header is reported in
/// [`FetchResult::redirect_target`] instead. Status codes are passed through
/// untouched. Without [`HttpFetcher::with_timeout`] a request waits forever.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::build(None)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(USER_AGENT);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let redirect_target = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to read response body: {e}")))?;

        Ok(FetchResult {
            status,
            redirect_target,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
