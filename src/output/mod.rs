//! Report formatting
//!
//! - `console` - indented tree streamed to the terminal with colored directories
//! - `json` - buffered JSON document written once the walk succeeds
//! - `config` - output configuration types

mod config;
mod console;
mod json;

pub use config::OutputConfig;
pub use console::{TreeReporter, ENTRY_MARKER, INDENT_MARKER};
pub use json::{JsonEntry, JsonReporter};
