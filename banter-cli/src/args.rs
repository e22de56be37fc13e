//! Command-line arguments.

use clap::Parser;

/// Interactive streaming chat against an OpenAI-compatible endpoint.
#[derive(Debug, Parser)]
#[command(name = "banter", version, about)]
pub struct Args {
    /// Endpoint to chat with, as `host:port` or a full base URL.
    /// Prompted for interactively when omitted.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Model identifier. Defaults to the client's built-in default.
    #[arg(long)]
    pub model: Option<String>,

    /// System prompt seeded as the first transcript message.
    #[arg(long, default_value = "You are a helpful assistant.")]
    pub system: String,

    /// Bearer token for the endpoint. Self-hosted endpoints usually need none.
    #[arg(long, env = "BANTER_API_KEY")]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Normalize a user-supplied endpoint into a base URL.
///
/// Bare `host:port` gets an `http://` scheme; a trailing slash is dropped so
/// path joining stays predictable.
pub fn normalize_endpoint(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    with_scheme.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_port_gets_http_scheme() {
        assert_eq!(normalize_endpoint("10.0.0.4:8000"), "http://10.0.0.4:8000");
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(
            normalize_endpoint("https://api.openai.com"),
            "https://api.openai.com"
        );
        assert_eq!(
            normalize_endpoint("http://localhost:8000"),
            "http://localhost:8000"
        );
    }

    #[test]
    fn trailing_slash_and_whitespace_are_dropped() {
        assert_eq!(
            normalize_endpoint("  http://localhost:8000/  "),
            "http://localhost:8000"
        );
    }
}
