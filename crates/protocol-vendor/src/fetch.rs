use std::sync::Arc;

use serde::Deserialize;

/// Outcome of one completed HTTP exchange, whatever its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub status: u16,
    /// `Location` header of the response, if any. Redirects are never followed.
    pub redirect_target: Option<String>,
    pub body: String,
}

impl FetchResult {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            redirect_target: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors raised by a [`Fetcher`] itself.
///
/// An HTTP error status is not a `FetchError`; it comes back as a normal
/// [`FetchResult`] and callers decide what it means.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
}

/// Retrieves a single remote document.
///
/// One request per call; implementations must not pipeline.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError>;
}

#[async_trait::async_trait]
impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        (**self).fetch(url).await
    }
}

/// How the synchronizer treats responses outside the 2xx range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Non-2xx responses (including redirects) fail the run.
    #[default]
    Strict,
    /// Any response body is written as content.
    Permissive,
}

impl StatusPolicy {
    /// Returns an error message when `result` must not be written.
    pub fn check(self, result: &FetchResult) -> Result<(), String> {
        if result.is_success() || self == Self::Permissive {
            return Ok(());
        }

        Err(match &result.redirect_target {
            Some(location) => format!("HTTP {} redirect to {location}", result.status),
            None => format!("HTTP {}", result.status),
        })
    }
}
