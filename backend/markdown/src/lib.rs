//! Assistant Reply Markdown Renderer
//!
//! Turns the markdown replies produced by the VentureMind assistant into HTML
//! fragments safe to inject into a chat surface, and into plain text for speech.
//!
//! Only a small fixed subset is understood: `## ` / `### ` headings, `- ` list
//! items, `**bold**` inside headings and paragraphs, and blank lines. Input is
//! always escaped before any of it is interpreted.

pub mod escape;
pub mod inline;
pub mod ir;
pub mod renderer;
pub mod speech;

pub use escape::escape;
pub use inline::transform_inline;
pub use ir::{ClassifiedLine, LineKind, classify, classify_lines};
pub use renderer::{BlockAssembler, ListState, Renderer, render_markdown};
pub use speech::speech_text;
