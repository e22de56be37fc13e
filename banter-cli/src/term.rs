//! Terminal implementations of the session IO seams.

use std::future::Future;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use banter_session::{InputEvent, InputSource, RenderSink};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Readline prompt shown for each turn.
const USER_PROMPT: &str = "[User] ";

/// Label printed before the first fragment of each reply.
const REPLY_LABEL: &str = "[Chatbot] ";

/// Line-edited stdin input via rustyline.
///
/// Ctrl-c at the prompt maps to [`InputEvent::Interrupted`] and ctrl-d to
/// [`InputEvent::Eof`]. The blocking read runs on the blocking thread pool
/// so the runtime stays free for the ctrl-c watcher.
pub struct ReadlineInput {
    editor: Arc<Mutex<DefaultEditor>>,
}

impl ReadlineInput {
    pub fn new(editor: DefaultEditor) -> Self {
        Self {
            editor: Arc::new(Mutex::new(editor)),
        }
    }
}

impl InputSource for ReadlineInput {
    fn read_line(&mut self) -> impl Future<Output = io::Result<InputEvent>> + Send {
        let editor = Arc::clone(&self.editor);
        async move {
            tokio::task::spawn_blocking(move || {
                let mut editor = editor.lock().expect("readline editor lock");
                match editor.readline(USER_PROMPT) {
                    Ok(line) => {
                        let _ = editor.add_history_entry(line.as_str());
                        Ok(InputEvent::Line(line))
                    }
                    Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
                    Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
                    Err(e) => Err(io::Error::other(e)),
                }
            })
            .await
            .map_err(io::Error::other)?
        }
    }
}

/// Renders reply fragments to stdout as they arrive.
///
/// The reply label is printed lazily before the first fragment of a turn, so
/// a zero-fragment reply leaves no dangling label.
pub struct TerminalSink {
    at_reply_start: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            at_reply_start: true,
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TerminalSink {
    fn fragment(&mut self, text: &str) {
        if self.at_reply_start {
            print!("{REPLY_LABEL}");
            self.at_reply_start = false;
        }
        print!("{text}");
        // Fragments rarely end in a newline; flush so the text appears now.
        let _ = io::stdout().flush();
    }

    fn turn_end(&mut self) {
        println!();
        self.at_reply_start = true;
    }

    fn notice(&mut self, text: &str) {
        if !self.at_reply_start {
            println!();
            self.at_reply_start = true;
        }
        eprintln!("error: {text}");
    }
}
