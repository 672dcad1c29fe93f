//! Clipboard adapters for sharing deals.
//!
//! Sharing tries a primary clipboard, then a fallback, and reports which one
//! took the text. A failed copy is never fatal: the caller only shows a toast.
//!
//! The primary adapter emits an OSC 52 escape sequence, which most terminal
//! emulators turn into a system clipboard write. The fallback writes the text
//! to a file the user can copy from.

use crate::domain::{DealsError, Result};
use base64::Engine;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

/// A place share text can be copied to.
pub trait Clipboard {
    /// Short adapter name used in logs.
    fn name(&self) -> &'static str;

    /// Copies `text`.
    ///
    /// # Errors
    ///
    /// Returns [`DealsError::Clipboard`] or [`DealsError::Io`] when the text
    /// could not be delivered.
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Terminal clipboard via the OSC 52 escape sequence.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    out: W,
    is_terminal: bool,
}

impl Osc52Clipboard<io::Stderr> {
    /// Writes to stderr, keeping stdout free for view model output.
    #[must_use]
    pub fn stderr() -> Self {
        let out = io::stderr();
        let is_terminal = out.is_terminal();
        Self { out, is_terminal }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    /// Wraps an arbitrary writer that is known to reach a terminal.
    pub fn new(out: W) -> Self {
        Self {
            out,
            is_terminal: true,
        }
    }

    /// Consumes the adapter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Builds the OSC 52 sequence that sets the system clipboard to `text`.
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{payload}\x07")
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        if !self.is_terminal {
            return Err(DealsError::Clipboard("output is not a terminal".to_string()));
        }
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Fallback clipboard that writes the text to a file.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Clipboard for FileClipboard {
    fn name(&self) -> &'static str {
        "file"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Which path, if any, accepted the share text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied,
    CopiedWithFallback,
    Failed,
}

impl ShareOutcome {
    /// Toast shown to the user after a share attempt.
    #[must_use]
    pub const fn toast(self) -> &'static str {
        match self {
            Self::Copied | Self::CopiedWithFallback => "Link Copied!",
            Self::Failed => "Failed to copy link",
        }
    }
}

/// Copies `text` with `primary`, falling back to `fallback` on failure.
pub fn copy_with_fallback(
    primary: &mut dyn Clipboard,
    fallback: &mut dyn Clipboard,
    text: &str,
) -> ShareOutcome {
    let _span = tracing::debug_span!("copy_with_fallback", text_len = text.len()).entered();

    let primary_err = match primary.copy(text) {
        Ok(()) => {
            tracing::debug!(clipboard = primary.name(), "share text copied");
            return ShareOutcome::Copied;
        }
        Err(e) => e,
    };
    tracing::warn!(clipboard = primary.name(), error = %primary_err, "primary copy failed, trying fallback");

    match fallback.copy(text) {
        Ok(()) => {
            tracing::debug!(clipboard = fallback.name(), "share text copied with fallback");
            ShareOutcome::CopiedWithFallback
        }
        Err(e) => {
            tracing::warn!(clipboard = fallback.name(), error = %e, "fallback copy failed");
            ShareOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Broken;

    impl Clipboard for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn copy(&mut self, _text: &str) -> Result<()> {
            Err(DealsError::Clipboard("unavailable".to_string()))
        }
    }

    #[test]
    fn osc52_encodes_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");

        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.copy("hi").unwrap();
        assert_eq!(clipboard.into_inner(), b"\x1b]52;c;aGk=\x07".to_vec());
    }

    #[test]
    fn primary_success() {
        let mut primary = Osc52Clipboard::new(Vec::new());
        let outcome = copy_with_fallback(&mut primary, &mut Broken, "deal");
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(outcome.toast(), "Link Copied!");
    }

    #[test]
    fn falls_back_to_file() {
        let dir = TempDir::new().unwrap();
        let mut fallback = FileClipboard::new(dir.path().join("nested").join("clipboard.txt"));
        let outcome = copy_with_fallback(&mut Broken, &mut fallback, "deal text");
        assert_eq!(outcome, ShareOutcome::CopiedWithFallback);
        assert_eq!(fs::read_to_string(fallback.path()).unwrap(), "deal text");
        assert_eq!(outcome.toast(), "Link Copied!");
    }

    #[test]
    fn both_failing_reports_failure() {
        let outcome = copy_with_fallback(&mut Broken, &mut Broken, "deal");
        assert_eq!(outcome, ShareOutcome::Failed);
        assert_eq!(outcome.toast(), "Failed to copy link");
    }
}
