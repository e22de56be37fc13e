//! banter — interactive streaming chat for OpenAI-compatible endpoints.
//!
//! Wires the session loop to a terminal: rustyline input, stdout rendering,
//! ctrl-c cancellation, and a chat-completions backend.

mod args;
mod term;

use anyhow::Result;
use banter_provider_openai::OpenAi;
use banter_session::{SessionEnd, SessionLoop};
use banter_types::Transcript;
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, normalize_endpoint};
use crate::term::{ReadlineInput, TerminalSink};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut editor = DefaultEditor::new()?;

    let endpoint = match &args.endpoint {
        Some(endpoint) => normalize_endpoint(endpoint),
        None => match editor.readline("Endpoint: ") {
            Ok(line) => normalize_endpoint(&line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Bye!");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        },
    };
    tracing::info!(endpoint = %endpoint, "starting chat session");

    let mut backend = OpenAi::new(endpoint);
    if let Some(model) = &args.model {
        backend = backend.model(model);
    }
    if let Some(key) = &args.api_key {
        backend = backend.api_key(key);
    }

    // Ctrl-c outside the prompt (i.e. while a reply is streaming) cancels
    // the session; at the prompt rustyline reports it as Interrupted instead.
    let cancel = CancellationToken::new();
    let watcher_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            watcher_token.cancel();
        }
    });

    let session = SessionLoop::new(
        backend,
        ReadlineInput::new(editor),
        TerminalSink::new(),
        Transcript::new(&args.system),
        args.model.unwrap_or_default(),
    )
    .with_cancellation(cancel);

    let (transcript, end) = session.run().await;
    tracing::debug!(messages = transcript.len(), end = ?end, "session closed");

    match end {
        // Mid-stream cancellation leaves the cursor inside a reply line.
        SessionEnd::Cancelled => println!("\nBye!"),
        SessionEnd::Interrupted | SessionEnd::Eof => println!("Bye!"),
    }

    Ok(())
}
