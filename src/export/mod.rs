//! Report rendering and delivery: a Markdown document for disk and a short
//! summary for the clipboard.

mod markdown;
mod summary;
mod writer;

pub use markdown::render_markdown;
pub use summary::render_summary;
pub use writer::{copy_to_clipboard, write_report};
