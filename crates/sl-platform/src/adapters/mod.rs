//! # Platform Adapters / 平台适配器
//!
//! - `clipboard` - System clipboard writes through arboard
//! - `alert` - Blocking alerts printed to the terminal
//! - `markdown` - Markdown engine seam

pub mod alert;
pub mod clipboard;
pub mod markdown;

pub use alert::TerminalAlert;
pub use clipboard::ArboardClipboard;
pub use markdown::PassthroughMarkdownRenderer;
