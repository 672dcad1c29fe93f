//! Infrastructure layer for filesystem, environment and terminal interactions.
//!
//! - [`paths`]: data directory resolution and `~` expansion
//! - [`clipboard`]: share-text clipboard adapters with a fallback chain

pub mod clipboard;
pub mod paths;

pub use clipboard::{copy_with_fallback, Clipboard, FileClipboard, Osc52Clipboard, ShareOutcome};
pub use paths::{data_dir, expand_tilde};
