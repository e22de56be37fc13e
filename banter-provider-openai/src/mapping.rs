//! Mapping from [`ChatRequest`] to the chat-completions JSON body.

use banter_types::ChatRequest;

/// Build the request body for the chat-completions endpoint.
///
/// The `messages` array is the transcript snapshot serialized verbatim, in
/// order — full-history replay, the service holds no state between requests.
/// `stream` is always true: this client speaks exactly one protocol shape.
pub(crate) fn to_api_request(request: &ChatRequest, default_model: &str) -> serde_json::Value {
    let model = if request.model.is_empty() {
        default_model
    } else {
        &request.model
    };

    serde_json::json!({
        "model": model,
        "messages": &request.messages,
        "stream": true,
    })
}
