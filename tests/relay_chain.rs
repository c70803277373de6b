//! End-to-end tests through ingress, relay and validator.

use std::time::Duration;

use jsonrpsee::http_client::HttpClientBuilder;
use payment_relay::protocol::MessageServiceClient;
use payment_relay::validator::rule::REJECTED_PREFIX;
use payment_relay::PaymentNotice;
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_valid_payment() {
    let chain = common::start_chain().await;

    let res = common::client()
        .post(chain.send_url())
        .json(&json!({"amount": 60.0, "address": "abc123"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "payment is valid for address: abc123"}));
}

#[tokio::test]
async fn test_insufficient_amount() {
    let chain = common::start_chain().await;

    let res = common::client()
        .post(chain.send_url())
        .json(&json!({"amount": 40.0, "address": "abc123"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": format!("{REJECTED_PREFIX}abc123") })
    );
}

#[tokio::test]
async fn test_unknown_address() {
    let chain = common::start_chain().await;

    let res = common::client()
        .post(chain.send_url())
        .json(&json!({"amount": 10.0, "address": "unknown999"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": format!("{REJECTED_PREFIX}unknown999") })
    );
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let chain = common::start_chain().await;

    let res = common::client()
        .post(chain.send_url())
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await.unwrap(), "Invalid request payload");
}

#[tokio::test]
async fn test_get_is_405() {
    let chain = common::start_chain().await;

    let res = common::client().get(chain.send_url()).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.text().await.unwrap(), "Only POST method is allowed");
}

#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let chain = common::start_chain().await;

    let res = common::client()
        .post(chain.send_url())
        .body(r#"{"amount": 80, "address": "xyz789"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "payment is valid for address: xyz789");
}

#[tokio::test]
async fn test_repeated_notice_same_status() {
    let chain = common::start_chain().await;
    let client = common::client();

    let mut statuses = Vec::new();
    for _ in 0..5 {
        let body: Value = client
            .post(chain.send_url())
            .json(&json!({"amount": 50.0, "address": "abc123"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        statuses.push(body);
    }
    assert!(statuses.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let chain = common::start_chain().await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = chain.send_url();
        let (amount, valid) = if i % 2 == 0 { (60.0, true) } else { (10.0, false) };
        tasks.push(tokio::spawn(async move {
            let body: Value = client
                .post(url)
                .json(&json!({"amount": amount, "address": "abc123"}))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            (valid, body["status"].as_str().unwrap().to_string())
        }));
    }

    for task in tasks {
        let (valid, status) = task.await.unwrap();
        assert_eq!(status.starts_with("payment is valid"), valid, "{status}");
    }
}

#[tokio::test]
async fn test_relay_returns_validator_status_unchanged() {
    let chain = common::start_chain().await;

    let client = HttpClientBuilder::default()
        .request_timeout(Duration::from_secs(5))
        .build(chain.relay.url())
        .unwrap();
    let status = client
        .send_message(PaymentNotice::new(76.0, "xyz789"))
        .await
        .unwrap();

    assert_eq!(status.status, "payment is valid for address: xyz789");
}

#[tokio::test]
async fn test_validator_wire_format() {
    let chain = common::start_chain().await;

    let res = common::client()
        .post(chain.validator.url())
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "message_SendMessage",
            "params": [{"amount": 60.0, "address": "abc123"}]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(
        body["result"],
        json!({"status": "payment is valid for address: abc123"})
    );
}

#[tokio::test]
async fn test_health() {
    let chain = common::start_chain().await;

    let res = common::client()
        .get(format!("http://{}/health", chain.ingress))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "ok");
}
