//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `streaming` - Line-at-a-time formatter for console output
//! - `tree` - Buffered formatter that returns the whole tree as a string

mod config;
mod streaming;
mod tree;

pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
pub use tree::TreeFormatter;
