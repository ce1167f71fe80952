//! HTTP search invocation against a mock backend

mod common;

use common::{endpoint_for, search_mock, setup_mock_server};
use seqsearch::{ClientConfig, HttpSearchBackend, Query, SearchBackend, SearchError};
use std::time::Duration;
use tokio::net::TcpListener;

fn backend_for(endpoint: &str) -> HttpSearchBackend {
    let config = ClientConfig::builder()
        .endpoint(endpoint)
        .build()
        .expect("valid config");
    HttpSearchBackend::new(&config).expect("client builds")
}

#[tokio::test]
async fn posts_raw_query_and_parses_ranked_pairs() {
    let mut server = setup_mock_server().await;
    let mock = search_mock(
        &mut server,
        "Cat Dog",
        200,
        r#"[["docs/b.txt",0.8],["docs/c.txt",0.5]]"#,
    )
    .await;

    let backend = backend_for(&endpoint_for(&server));
    let results = backend
        .search(&Query::from("Cat Dog"))
        .await
        .expect("search succeeds");

    let paths: Vec<&str> = results.paths().collect();
    assert_eq!(paths, vec!["docs/b.txt", "docs/c.txt"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn null_rank_from_empty_document_still_lists_the_path() {
    let mut server = setup_mock_server().await;
    let _mock = search_mock(&mut server, "cat", 200, r#"[["empty.txt",null],["a.txt",0.5]]"#).await;

    let backend = backend_for(&endpoint_for(&server));
    let results = backend.search(&Query::from("cat")).await.expect("search succeeds");

    let paths: Vec<&str> = results.paths().collect();
    assert_eq!(paths, vec!["empty.txt", "a.txt"]);
}

#[tokio::test]
async fn empty_answer_is_an_empty_list() {
    let mut server = setup_mock_server().await;
    let _mock = search_mock(&mut server, "zzzz", 200, "[]").await;

    let backend = backend_for(&endpoint_for(&server));
    let results = backend.search(&Query::from("zzzz")).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn non_success_status_is_backend_failure() {
    let mut server = setup_mock_server().await;
    let _mock = search_mock(&mut server, "cat", 400, "Error 400: Query must be a valid utf-8").await;

    let backend = backend_for(&endpoint_for(&server));
    let err = backend.search(&Query::from("cat")).await.unwrap_err();

    match err {
        SearchError::Backend { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("valid utf-8"));
        }
        other => panic!("expected backend failure, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_parse_failure() {
    let mut server = setup_mock_server().await;
    let _mock = search_mock(&mut server, "cat", 200, r#"{"a.txt": 0.9}"#).await;

    let backend = backend_for(&endpoint_for(&server));
    let err = backend.search(&Query::from("cat")).await.unwrap_err();
    assert_eq!(err.kind(), "parse");
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_failure() {
    // Bind then drop to get a local port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = backend_for(&format!("http://{addr}/api/search"));
    let err = backend.search(&Query::from("cat")).await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn configured_timeout_turns_hung_request_into_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept connections and never answer
    let hold = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    let config = ClientConfig::builder()
        .endpoint(format!("http://{addr}/api/search"))
        .request_timeout_secs(Some(1))
        .build()
        .unwrap();
    let backend = HttpSearchBackend::new(&config).unwrap();

    let err = tokio::time::timeout(Duration::from_secs(10), backend.search(&Query::from("cat")))
        .await
        .expect("request timeout fires before the guard")
        .unwrap_err();
    assert!(err.is_transport());

    hold.abort();
}
