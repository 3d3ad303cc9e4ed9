//! Integration tests driving `HttpForwarder` against a local mock upstream.

use std::time::Duration;

use bytes::Bytes;
use futures::TryStreamExt;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rpc_warden_core::RpcRequest;
use rpc_warden_upstream::{
    ForwardError, Forwarder, HttpForwarder, UpstreamConfig, UpstreamResponse,
};

async fn read_body(response: UpstreamResponse) -> Vec<u8> {
    let chunks: Vec<Bytes> = response.body.try_collect().await.expect("body stream failed");

    let mut body = Vec::new();
    for chunk in chunks {
        body.extend_from_slice(&chunk);
    }
    body
}

#[tokio::test]
async fn replays_status_and_body_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"jsonrpc":"2.0","result":"0x10d4f","id":1}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let forwarder = HttpForwarder::new(UpstreamConfig::new(server.uri()));
    let request = RpcRequest::new("eth_blockNumber").with_params(vec![]).with_id(1);

    let response = forwarder.forward(request).await.expect("forward failed");

    assert_eq!(response.status, 200);
    assert_eq!(
        read_body(response).await,
        br#"{"jsonrpc":"2.0","result":"0x10d4f","id":1}"#
    );
}

#[tokio::test]
async fn overwrites_the_callers_version_claim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"jsonrpc": "2.0", "method": "eth_blockNumber", "id": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = RpcRequest::new("eth_blockNumber").with_id(7);
    request.jsonrpc = "1.0".to_owned();

    let forwarder = HttpForwarder::new(UpstreamConfig::new(server.uri()));
    forwarder.forward(request).await.expect("forward failed");
}

#[tokio::test]
async fn fills_in_a_missing_version() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"jsonrpc": "2.0", "method": "eth_blockNumber"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let request: RpcRequest =
        serde_json::from_value(json!({"method": "eth_blockNumber", "id": 3})).unwrap();
    assert_eq!(request.jsonrpc, "");

    let forwarder = HttpForwarder::new(UpstreamConfig::new(server.uri()));
    forwarder.forward(request).await.expect("forward failed");
}

#[tokio::test]
async fn relays_params_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "eth_getBlockByNumber",
            "params": ["0x10d4f", {"fullTransactions": false}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let request = RpcRequest::new("eth_getBlockByNumber")
        .with_params(vec![json!("0x10d4f"), json!({"fullTransactions": false})])
        .with_id(1);

    let forwarder = HttpForwarder::new(UpstreamConfig::new(server.uri()));
    forwarder.forward(request).await.expect("forward failed");
}

#[tokio::test]
async fn upstream_error_status_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_raw(r#"{"error":"rate limited"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let forwarder = HttpForwarder::new(UpstreamConfig::new(server.uri()));
    let response = forwarder
        .forward(RpcRequest::new("eth_blockNumber"))
        .await
        .expect("forward failed");

    assert_eq!(response.status, 429);
    assert_eq!(read_body(response).await, br#"{"error":"rate limited"}"#);
}

#[tokio::test]
async fn slow_upstream_classifies_as_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let forwarder = HttpForwarder::new(
        UpstreamConfig::new(server.uri()).with_timeout(Duration::from_millis(50)),
    );

    let err = forwarder
        .forward(RpcRequest::new("eth_blockNumber"))
        .await
        .expect_err("expected a timeout");

    assert!(err.is_timeout());
}

#[tokio::test]
async fn unreachable_upstream_classifies_as_transport() {
    // Discard port, nothing listens there.
    let forwarder = HttpForwarder::new(
        UpstreamConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
    );

    let err = forwarder
        .forward(RpcRequest::new("eth_blockNumber"))
        .await
        .expect_err("expected a transport error");

    assert!(!err.is_timeout());
    assert!(matches!(err, ForwardError::Transport(_)));
}
