//! Search invocation: one request/response cycle per query
//!
//! `SearchBackend` is the seam between the dispatch worker and whatever
//! answers queries. `HttpSearchBackend` is the production implementation that
//! POSTs the raw query text and decodes the ranked JSON answer.

use futures::future::BoxFuture;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tracing::debug;

use super::errors::{SearchError, SearchResult};
use super::types::{Query, ResultList};
use crate::config::ClientConfig;

/// Anything that can turn a query into a ranked result list.
pub trait SearchBackend: Send + Sync + 'static {
    fn search<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SearchResult<ResultList>>;
}

/// Backend reached over HTTP.
///
/// No retries. With no `request_timeout` configured a hung request waits
/// forever, and so does every query queued behind it.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: Client,
    endpoint: String,
    user_agent: String,
    request_timeout: Option<Duration>,
}

impl HttpSearchBackend {
    /// Build a backend from validated client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> SearchResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| SearchError::Transport {
                endpoint: config.endpoint().to_string(),
                source,
            })?;
        Ok(Self::with_client(client, config))
    }

    /// Build a backend around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint().to_string(),
            user_agent: config.user_agent().to_string(),
            request_timeout: config.request_timeout(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute(&self, query: &Query) -> SearchResult<ResultList> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .body(query.as_str().to_owned());

        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|source| SearchError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| SearchError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(SearchError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let results = ResultList::from_json(&body)?;
        debug!(
            query = %query,
            rows = results.len(),
            "Search backend answered"
        );
        Ok(results)
    }
}

impl SearchBackend for HttpSearchBackend {
    fn search<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SearchResult<ResultList>> {
        Box::pin(self.execute(query))
    }
}
