//! Integration tests for `HttpVoteFetcher` using HTTP stubbing.
//!
//! These run the real reqwest client against a wiremock server, so they
//! cover URL construction, the `x-api-key` header, and status mapping
//! without touching the network.

use rollcall::senate::{FetchError, HttpVoteFetcher, VoteFetcher, VoteLocator};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE: &str = "<roll_call_vote><congress>119</congress></roll_call_vote>";

fn locator() -> VoteLocator {
    VoteLocator {
        congress: 119,
        session: 1,
        number: 124,
    }
}

#[tokio::test]
async fn fetches_document_with_api_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vote1191/vote_119_1_00124.xml"))
        .and(header("x-api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE, "application/xml"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpVoteFetcher::new(server.uri(), "test-api-key");

    let body = fetcher
        .fetch_vote(&locator())
        .await
        .expect("fetch should succeed");

    assert_eq!(body, SAMPLE.as_bytes());
}

#[tokio::test]
async fn empty_api_key_is_still_sent() {
    let server = MockServer::start().await;

    // Permissive credential handling: the header goes out empty rather
    // than the request failing fast.
    Mock::given(method("GET"))
        .and(path("/vote1191/vote_119_1_00124.xml"))
        .and(header("x-api-key", ""))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE, "application/xml"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpVoteFetcher::new(server.uri(), "");

    let body = fetcher
        .fetch_vote(&locator())
        .await
        .expect("fetch should succeed without a key");

    assert_eq!(body, SAMPLE.as_bytes());
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vote1172/vote_117_2_00071.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE, "application/xml"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpVoteFetcher::new(format!("{}/", server.uri()), "key");

    let result = fetcher
        .fetch_vote(&VoteLocator {
            congress: 117,
            session: 2,
            number: 71,
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vote1191/vote_119_1_00124.xml"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such vote"))
        .mount(&server)
        .await;

    let fetcher = HttpVoteFetcher::new(server.uri(), "test-api-key");

    let result = fetcher.fetch_vote(&locator()).await;

    assert!(matches!(
        result,
        Err(FetchError::Status { status: 404, ref message }) if message == "no such vote"
    ));
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vote1191/vote_119_1_00124.xml"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
        .mount(&server)
        .await;

    let fetcher = HttpVoteFetcher::new(server.uri(), "test-api-key");

    let result = fetcher.fetch_vote(&locator()).await;

    assert!(matches!(
        result,
        Err(FetchError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn transport_failure_maps_to_request_error() {
    // Nothing is listening on this port.
    let fetcher = HttpVoteFetcher::new("http://127.0.0.1:1", "test-api-key");

    let result = fetcher.fetch_vote(&locator()).await;

    assert!(matches!(result, Err(FetchError::Request(_))));
}
