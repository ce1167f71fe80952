//! Test utilities shared by the seqsearch integration tests

use futures::future::BoxFuture;
use mockito::{Mock, ServerGuard};
use parking_lot::Mutex;
use seqsearch::{Query, ResultList, ResultRow, SearchBackend, SearchError, SearchResult};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const SEARCH_PATH: &str = "/api/search";

/// Starts a mock search backend
#[allow(dead_code)]
pub async fn setup_mock_server() -> ServerGuard {
    mockito::Server::new_async().await
}

/// Full endpoint URL for a mock server
#[allow(dead_code)]
pub fn endpoint_for(server: &ServerGuard) -> String {
    format!("{}{SEARCH_PATH}", server.url())
}

/// Mocks one query: the request body must equal `query` exactly
#[allow(dead_code)]
pub async fn search_mock(server: &mut ServerGuard, query: &str, status: usize, body: &str) -> Mock {
    server
        .mock("POST", SEARCH_PATH)
        .match_header("content-type", "text/plain; charset=utf-8")
        .match_body(query)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// In-process backend with a fixed latency and answer per query.
///
/// Unknown queries answer `[]` immediately. Records when each request starts
/// and ends so tests can check that cycles never overlap.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct DelayedBackend {
    answers: Arc<HashMap<String, (Duration, Option<Vec<(String, f64)>>)>>,
    events: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl DelayedBackend {
    /// `None` rows make the query fail with a 500
    pub fn new(answers: Vec<(String, u64, Option<Vec<(String, f64)>>)>) -> Self {
        let answers = answers
            .into_iter()
            .map(|(query, delay_ms, rows)| (query, (Duration::from_millis(delay_ms), rows)))
            .collect();
        Self {
            answers: Arc::new(answers),
            events: Arc::default(),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }
}

impl SearchBackend for DelayedBackend {
    fn search<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SearchResult<ResultList>> {
        Box::pin(async move {
            self.events.lock().push(format!("start:{query}"));
            let (delay, rows) = self
                .answers
                .get(query.as_str())
                .cloned()
                .unwrap_or((Duration::ZERO, Some(Vec::new())));
            tokio::time::sleep(delay).await;
            self.events.lock().push(format!("end:{query}"));

            match rows {
                Some(rows) => Ok(rows
                    .into_iter()
                    .map(|(path, rank)| ResultRow::new(path, rank))
                    .collect::<Vec<_>>()
                    .into()),
                None => Err(SearchError::Backend {
                    status: 500,
                    body: "Error 500".into(),
                }),
            }
        })
    }
}

/// Owned `(path, rank)` rows from string literals
#[allow(dead_code)]
pub fn rows(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
    pairs.iter().map(|(p, r)| (p.to_string(), *r)).collect()
}
