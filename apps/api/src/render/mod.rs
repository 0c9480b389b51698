// Preview rendering: document -> ordered display blocks -> Markdown.
// Both steps are pure and need nothing beyond their input.

pub mod markdown;
pub mod preview;

pub use markdown::render_markdown;
pub use preview::{render_preview, PreviewBlock};
