//! Structured logging to a rotating JSON file.
//!
//! Spans and events from the `tracing` macros used throughout the crate are
//! formatted as JSON lines and written to a size-rotated file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → FileWriter → food-deals-trace.json
//! ```
//!
//! # Configuration
//!
//! - `trace_level`: `EnvFilter` directive, default `"info"`
//! - `trace_file`: output path, default `<data dir>/food-deals-trace.json`
//!
//! Files rotate at 10 MB with 3 numbered backups.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer usable as a `MakeWriter`

mod file_writer;
mod init;

pub use file_writer::{FileWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, trace_file_path, DEFAULT_TRACE_FILE};
