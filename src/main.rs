//! Line-oriented session driver and entry point.
//!
//! Reads one command per line from stdin, feeds it through the library's
//! event handler, executes the resulting actions and prints the new view
//! model as JSON whenever the screen changes.
//!
//! # Usage
//!
//! ```text
//! food-deals [config.toml]
//! ```
//!
//! # Session Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, load the catalog
//! 2. **Render**: Print the initial view model
//! 3. **Update**: Parse each line into an `Event`, delegate to the library
//! 4. **Execute**: Carry out actions (clipboard, links, submissions)
//! 5. **Render**: Print the view model again if the handler asked for it
//!
//! # Streams
//!
//! - stdout: view models, one pretty-printed JSON document per render
//! - stderr: toasts, outbound links, submissions and command errors
//!
//! # Commands
//!
//! `search [text]`, `sort <key>`, `tab <deals|favorites|history|account>`,
//! `open <id>`, `back`, `fav <id>`, `use <id>`, `unuse <id>`, `share <id>`,
//! `directions <id>`, `website <id>`, `compose`, `comment <text>`, `send`,
//! `reply <comment-id>`, `reply-text <text>`, `send-reply`,
//! `setting <label>`, `location <text>`, `reload`, `quit`.

#![allow(clippy::multiple_crate_versions)]

use food_deals::app::{parse_command, Command};
use food_deals::infrastructure::{copy_with_fallback, data_dir, FileClipboard, Osc52Clipboard};
use food_deals::observability::init_tracing;
use food_deals::{handle_event, initialize, Action, AppState, Config, Event};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// File the fallback clipboard writes share text to.
const FALLBACK_CLIPBOARD_FILE: &str = "clipboard.txt";

/// Runtime state: the library session plus the effect adapters.
struct Session {
    app: AppState,
    primary_clipboard: Osc52Clipboard<io::Stderr>,
    fallback_clipboard: FileClipboard,
}

impl Session {
    fn new(app: AppState) -> Self {
        Self {
            app,
            primary_clipboard: Osc52Clipboard::stderr(),
            fallback_clipboard: FileClipboard::new(data_dir().join(FALLBACK_CLIPBOARD_FILE)),
        }
    }

    /// Handles one event.
    ///
    /// # Returns
    ///
    /// - `true` if the view model should be printed again
    /// - `false` if the event was ignored or changed nothing visible
    fn update(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                eprintln!("error: {e}");
                false
            }
        }
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let vm = self.app.compute_viewmodel();
        let json = serde_json::to_string_pretty(&vm).map_err(io::Error::from)?;
        writeln!(out, "{json}")?;
        out.flush()
    }

    /// Executes a side effect requested by the event handler.
    ///
    /// - `CopyToClipboard`: OSC 52, then the fallback file, then a failure toast
    /// - `OpenUrl`: printed for the user to follow
    /// - `SubmitComment` / `SubmitReply`: acknowledged; nothing is stored
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CopyToClipboard { text } => {
                let outcome = copy_with_fallback(
                    &mut self.primary_clipboard,
                    &mut self.fallback_clipboard,
                    text,
                );
                eprintln!("{}", outcome.toast());
            }
            Action::OpenUrl { url } => {
                tracing::debug!(url = %url, "opening url");
                eprintln!("open: {url}");
            }
            Action::SubmitComment { deal_id, text } => {
                tracing::info!(deal_id = %deal_id, len = text.len(), "comment submitted");
                eprintln!("Comment posted");
            }
            Action::SubmitReply {
                deal_id,
                comment_id,
                username,
                text,
            } => {
                tracing::info!(
                    deal_id = %deal_id,
                    comment_id = %comment_id,
                    len = text.len(),
                    "reply submitted"
                );
                eprintln!("Reply to @{username} posted");
            }
        }
    }
}

fn load_config() -> food_deals::Result<Config> {
    std::env::args()
        .nth(1)
        .map_or_else(|| Ok(Config::default()), Config::from_file)
}

fn run() -> food_deals::Result<()> {
    let config = load_config()?;
    init_tracing(&config);
    tracing::info!(catalog = ?config.catalog_file, "starting session");

    let mut session = Session::new(initialize(&config)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.render(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let _span = tracing::debug_span!("session_command", line = %line).entered();

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Dispatch(event))) => {
                if session.update(&event) {
                    session.render(&mut out)?;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejected command");
                eprintln!("error: {e}");
            }
        }
    }

    tracing::info!("session ended");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("food-deals: {e}");
            ExitCode::FAILURE
        }
    }
}
