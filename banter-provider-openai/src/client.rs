//! Chat-completions client struct and builder.

use std::future::Future;

use banter_types::{ChatBackend, ChatRequest, ReplyStream, TransportError};

use crate::error::{map_http_status, map_reqwest_error};
use crate::mapping::to_api_request;
use crate::streaming::stream_reply_body;

/// Default model used when none is specified on the request.
const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct";

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Implements [`ChatBackend`] for use anywhere a backend is accepted.
///
/// # Example
///
/// ```no_run
/// use banter_provider_openai::OpenAi;
///
/// let client = OpenAi::new("http://localhost:8000")
///     .model("meta-llama/Llama-3.1-8B-Instruct")
///     .api_key("sk-...");
/// ```
pub struct OpenAi {
    /// Default model identifier used when the request does not specify one.
    pub(crate) model: String,
    /// API base URL, e.g. `http://host:8000`.
    pub(crate) base_url: String,
    /// Optional bearer token. Self-hosted endpoints usually need none.
    pub(crate) api_key: Option<String>,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl OpenAi {
    /// Create a new client for the given base URL with sensible defaults.
    ///
    /// Default model: `meta-llama/Llama-3.1-8B-Instruct`.
    /// No authentication unless [`api_key`](Self::api_key) is set.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            base_url: base_url.into(),
            api_key: None,
            client: reqwest::Client::new(),
        }
    }

    /// Override the default model.
    ///
    /// This is used when [`ChatRequest::model`] is empty.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a bearer token, sent as `Authorization: Bearer <key>`.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Build the chat completions endpoint URL.
    pub(crate) fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

impl ChatBackend for OpenAi {
    /// Submit a streaming chat request.
    ///
    /// Maps the [`ChatRequest`] to the chat-completions JSON body with
    /// `stream: true`, sends it, and wraps the response body into a
    /// [`ReplyStream`] of decoded fragments. A non-2xx status or a
    /// connection-level failure is returned as an error before any
    /// streaming begins.
    fn stream_reply(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<ReplyStream, TransportError>> + Send {
        let url = self.completions_url();
        let default_model = self.model.clone();
        let api_key = self.api_key.clone();
        let http_client = self.client.clone();

        async move {
            let body = to_api_request(&request, &default_model);

            tracing::debug!(url = %url, model = %body["model"], "sending streaming chat request");

            let mut builder = http_client
                .post(&url)
                .header("content-type", "application/json")
                .json(&body);
            if let Some(key) = &api_key {
                builder = builder.bearer_auth(key);
            }

            let response = builder.send().await.map_err(map_reqwest_error)?;

            let status = response.status();
            if !status.is_success() {
                let body_text = response.text().await.map_err(map_reqwest_error)?;
                return Err(map_http_status(status, &body_text));
            }

            Ok(stream_reply_body(response))
        }
    }
}
