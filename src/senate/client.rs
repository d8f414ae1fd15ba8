use async_trait::async_trait;
use thiserror::Error;

/// Coordinates identifying one roll-call vote document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteLocator {
    /// Congress number, e.g. 119
    pub congress: u16,
    /// Session within the congress (1 or 2)
    pub session: u8,
    /// Roll-call number within the session
    pub number: u32,
}

impl VoteLocator {
    /// Relative path of the vote document under the roll-call vote
    /// endpoint, e.g. `vote1191/vote_119_1_00124.xml`.
    #[must_use]
    pub fn document_path(&self) -> String {
        format!(
            "vote{congress}{session}/vote_{congress}_{session}_{number:05}.xml",
            congress = self.congress,
            session = self.session,
            number = self.number
        )
    }
}

/// Errors that can occur while fetching a vote document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("vote document request returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Trait for retrieving raw vote documents.
///
/// Implementations return the document bytes untouched; decoding is the
/// caller's concern. Use [`HttpVoteFetcher`] for real HTTP calls, or
/// [`mock::MockVoteFetcher`] in tests.
#[async_trait]
pub trait VoteFetcher: Send + Sync {
    /// Fetch the raw bytes of one roll-call vote document.
    async fn fetch_vote(&self, vote: &VoteLocator) -> Result<Vec<u8>, FetchError>;
}

/// HTTP-based implementation of [`VoteFetcher`].
///
/// Sends the configured API key as an `x-api-key` header on every
/// request. An empty key is sent as-is rather than failing; the
/// endpoint decides whether to accept anonymous requests.
pub struct HttpVoteFetcher {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpVoteFetcher {
    /// Create a new fetcher with the given endpoint base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a fetcher with a custom `reqwest::Client` (for testing
    /// with custom config).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl VoteFetcher for HttpVoteFetcher {
    async fn fetch_vote(&self, vote: &VoteLocator) -> Result<Vec<u8>, FetchError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            vote.document_path()
        );

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{FetchError, VoteFetcher, VoteLocator};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of [`VoteFetcher`] for unit tests.
    ///
    /// Configure the next response with [`set_fetch_result`] and verify
    /// requests with [`fetch_calls`].
    ///
    /// [`set_fetch_result`]: MockVoteFetcher::set_fetch_result
    /// [`fetch_calls`]: MockVoteFetcher::fetch_calls
    pub struct MockVoteFetcher {
        fetch_result: Mutex<Option<Result<Vec<u8>, FetchError>>>,
        fetch_calls: Mutex<Vec<VoteLocator>>,
    }

    impl MockVoteFetcher {
        pub fn new() -> Self {
            Self {
                fetch_result: Mutex::new(None),
                fetch_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for the next `fetch_vote` call.
        pub fn set_fetch_result(&self, result: Result<Vec<u8>, FetchError>) {
            *self.fetch_result.lock().unwrap() = Some(result);
        }

        /// Get all locators passed to `fetch_vote`.
        pub fn fetch_calls(&self) -> Vec<VoteLocator> {
            self.fetch_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockVoteFetcher {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl VoteFetcher for MockVoteFetcher {
        async fn fetch_vote(&self, vote: &VoteLocator) -> Result<Vec<u8>, FetchError> {
            self.fetch_calls.lock().unwrap().push(*vote);

            self.fetch_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }
}
