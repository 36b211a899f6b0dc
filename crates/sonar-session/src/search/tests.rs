//! Tests for the HTTP search client against a one-shot local stub server.

use super::*;
use crate::{ConversationTurn, ExchangeError, SearchClient, SearchRequest};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accept one connection, reply with `status` and `body`, and return the
/// raw request body the client sent.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/search", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let request_body = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending a full request");
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let headers = text[..split].to_ascii_lowercase();
                let length = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .map(|v| v.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                let body = &text[split + 4..];
                if body.len() >= length {
                    break body.to_string();
                }
            }
        };

        let reply = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(reply.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        request_body
    });

    (url, handle)
}

fn request() -> SearchRequest {
    SearchRequest {
        query: "gg #4".into(),
        conversation_history: vec![
            ConversationTurn::user("hello"),
            ConversationTurn::assistant("hi there"),
        ],
    }
}

#[tokio::test]
async fn success_reads_response_field() {
    let (url, server) = serve_once("200 OK", r#"{"response":"**GG #4** is a hybrid","extra":1}"#).await;
    let client = HttpSearchClient::new(SearchClientConfig::new(url)).unwrap();

    let reply = client.search(&request()).await.unwrap();
    assert_eq!(reply.response, "**GG #4** is a hybrid");

    let sent: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
    assert_eq!(sent["query"], "gg #4");
    assert_eq!(sent["conversation_history"][0]["role"], "user");
    assert_eq!(sent["conversation_history"][1]["content"], "hi there");
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let (url, server) = serve_once("503 Service Unavailable", r#"{"detail":"down"}"#).await;
    let client = HttpSearchClient::new(SearchClientConfig::new(url)).unwrap();

    let err = client.search(&request()).await.unwrap_err();
    match err {
        ExchangeError::Status { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("down"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn client_error_maps_to_status() {
    let (url, server) = serve_once("422 Unprocessable Entity", "{}").await;
    let client = HttpSearchClient::new(SearchClientConfig::new(url)).unwrap();

    let err = client.search(&request()).await.unwrap_err();
    assert!(matches!(err, ExchangeError::Status { status: 422, .. }));
    server.await.unwrap();
}

#[tokio::test]
async fn missing_response_field_is_decode_error() {
    let (url, server) = serve_once("200 OK", r#"{"answer":"wrong shape"}"#).await;
    let client = HttpSearchClient::new(SearchClientConfig::new(url)).unwrap();

    let err = client.search(&request()).await.unwrap_err();
    assert!(matches!(err, ExchangeError::Decode(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/search", listener.local_addr().unwrap());
    drop(listener);

    let client = HttpSearchClient::new(SearchClientConfig::new(url)).unwrap();
    let err = client.search(&request()).await.unwrap_err();
    assert!(matches!(err, ExchangeError::Network(_)));
}

#[test]
fn config_builder() {
    let config = SearchClientConfig::new("http://localhost/search")
        .with_request_timeout(std::time::Duration::from_secs(30));
    assert_eq!(config.request_timeout, Some(std::time::Duration::from_secs(30)));

    let client = HttpSearchClient::new(config).unwrap();
    assert_eq!(client.endpoint(), "http://localhost/search");
}
