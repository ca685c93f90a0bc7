//! TelegramSender against a wiremock Bot API.

use homework_notifier::domain::errors::DeliveryError;
use homework_notifier::domain::ports::message_sender::MessageSender;
use homework_notifier::infrastructure::providers::TelegramSender;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sender_for(server: &MockServer) -> TelegramSender {
    TelegramSender::new(server.uri(), "123:abc", Duration::from_secs(2))
        .expect("failed to create sender")
}

#[tokio::test]
async fn test_send_posts_chat_id_and_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_json(json!({"chat_id": "42", "text": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
        .expect(1)
        .mount(&server)
        .await;

    sender_for(&server)
        .send("42", "hello")
        .await
        .expect("send failed");
}

#[tokio::test]
async fn test_api_error_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let err = sender_for(&server).send("42", "hello").await.unwrap_err();

    assert_eq!(
        err,
        DeliveryError::Rejected {
            status: 400,
            description: "Bad Request: chat not found".to_string()
        }
    );
}

#[tokio::test]
async fn test_ok_false_with_success_status_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": false})))
        .mount(&server)
        .await;

    let err = sender_for(&server).send("42", "hello").await.unwrap_err();
    assert!(matches!(err, DeliveryError::Rejected { status: 200, .. }));
}

#[tokio::test]
async fn test_server_error_without_json_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = sender_for(&server).send("42", "hello").await.unwrap_err();
    assert!(matches!(err, DeliveryError::Rejected { status: 502, .. }));
}

#[tokio::test]
async fn test_transport_error_hides_bot_token() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    drop(listener);
    let sender = TelegramSender::new(uri, "123:abc", Duration::from_secs(2)).unwrap();

    let err = sender.send("42", "hello").await.unwrap_err();

    assert!(matches!(err, DeliveryError::Transport(_)));
    assert!(!err.to_string().contains("123:abc"));
}
