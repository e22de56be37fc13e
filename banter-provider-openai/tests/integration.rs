//! Integration tests for the chat-completions client using wiremock.

use banter_provider_openai::OpenAi;
use banter_types::{ChatBackend, ChatRequest, Message, StreamEvent, TransportError};
use futures::StreamExt;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn minimal_request() -> ChatRequest {
    ChatRequest {
        model: String::new(),
        messages: vec![
            Message::system("You are a helpful assistant."),
            Message::user("Hello"),
        ],
    }
}

fn sse_body(fragments: &[&str]) -> String {
    let mut body = String::new();
    for fragment in fragments {
        body.push_str(&format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":{}}}}}]}}\n\n",
            serde_json::to_string(fragment).unwrap()
        ));
    }
    body.push_str("data: [DONE]\n\n");
    body
}

async fn collect_deltas(provider: &OpenAi, request: ChatRequest) -> Vec<String> {
    let reply = provider.stream_reply(request).await.expect("stream opens");
    reply
        .events
        .filter_map(|ev| async move {
            match ev {
                StreamEvent::Delta(text) => Some(text),
                StreamEvent::Error(e) => panic!("unexpected stream error: {e}"),
            }
        })
        .collect()
        .await
}

#[tokio::test]
async fn stream_reply_sends_exact_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "model": "meta-llama/Llama-3.1-8B-Instruct",
            "messages": [
                {"role": "system", "content": "You are a helpful assistant."},
                {"role": "user", "content": "Hello"},
            ],
            "stream": true,
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sse_body(&["Hi"]), "text/event-stream"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri());
    let deltas = collect_deltas(&provider, minimal_request()).await;
    assert_eq!(deltas, vec!["Hi"]);
}

#[tokio::test]
async fn no_authorization_header_without_api_key() {
    let mock_server = MockServer::start().await;

    // Matches only requests that DO carry an authorization header; with no
    // key configured this mock must never be hit.
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sse_body(&["ok"]), "text/event-stream"),
        )
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri());
    let deltas = collect_deltas(&provider, minimal_request()).await;
    assert_eq!(deltas, vec!["ok"]);
}

#[tokio::test]
async fn api_key_is_sent_as_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sse_body(&["ok"]), "text/event-stream"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri()).api_key("sk-test-key");
    let deltas = collect_deltas(&provider, minimal_request()).await;
    assert_eq!(deltas, vec!["ok"]);
}

#[tokio::test]
async fn fragments_arrive_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sse_body(&["He", "llo", ", ", "world"]), "text/event-stream"),
        )
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri());
    let deltas = collect_deltas(&provider, minimal_request()).await;
    assert_eq!(deltas, vec!["He", "llo", ", ", "world"]);
}

#[tokio::test]
async fn malformed_and_control_frames_are_skipped() {
    let mock_server = MockServer::start().await;

    let body = "\
: keep-alive\n\
data: not-json\n\
\n\
data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\
\n\
data: {\"choices\":[{\"delta\":{\"content\":\"only\"}}]}\n\
\n\
data: {\"choices\":[{\"delta\":{},\"finish_reason\":\"stop\"}]}\n\
\n\
data: [DONE]\n\n";

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri());
    let deltas = collect_deltas(&provider, minimal_request()).await;
    assert_eq!(deltas, vec!["only"]);
}

#[tokio::test]
async fn status_404_maps_to_model_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model does not exist"))
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri());
    let err = provider.stream_reply(minimal_request()).await.unwrap_err();
    assert!(matches!(err, TransportError::ModelNotFound(msg) if msg == "model does not exist"));
}

#[tokio::test]
async fn status_401_maps_to_authentication() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri());
    let err = provider.stream_reply(minimal_request()).await.unwrap_err();
    assert!(matches!(err, TransportError::Authentication(msg) if msg == "invalid key"));
}

#[tokio::test]
async fn status_500_maps_to_service_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri());
    let err = provider.stream_reply(minimal_request()).await.unwrap_err();
    assert!(matches!(err, TransportError::ServiceUnavailable(msg) if msg == "internal error"));
}

#[tokio::test]
async fn connection_refused_maps_to_network() {
    // Nothing listens here; the request fails before any streaming begins.
    let provider = OpenAi::new("http://127.0.0.1:1");
    let err = provider.stream_reply(minimal_request()).await.unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn zero_content_stream_yields_no_fragments() {
    let mock_server = MockServer::start().await;

    let body = "\
data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\
\n\
data: {\"choices\":[{\"delta\":{},\"finish_reason\":\"stop\"}]}\n\
\n\
data: [DONE]\n\n";

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri());
    let deltas = collect_deltas(&provider, minimal_request()).await;
    assert!(deltas.is_empty());
}

#[tokio::test]
async fn two_decoders_over_the_same_body_agree() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sse_body(&["a", "b", "c"]), "text/event-stream"),
        )
        .mount(&mock_server)
        .await;

    let provider = OpenAi::new(mock_server.uri());
    let first = collect_deltas(&provider, minimal_request()).await;
    let second = collect_deltas(&provider, minimal_request()).await;
    assert_eq!(first, second);
}
