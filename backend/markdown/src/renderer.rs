//! Markdown to HTML Renderer
//!
//! Folds the classified line stream into block-level HTML in one forward pass.
//! The only state carried between lines is whether a `<ul>` is currently open.

use tracing::trace;

use crate::escape::escape;
use crate::inline::transform_inline;
use crate::ir::{ClassifiedLine, LineKind, classify_lines};

const LINE_BREAK: &str = "<br/>";
const LIST_OPEN: &str = "<ul>";
const LIST_CLOSE: &str = "</ul>";

/// List context carried across lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Outside,
    InsideList,
}

/// Single-pass assembler turning classified lines into HTML.
///
/// Consecutive list items share one `<ul>`: it opens at the first item of a
/// run and closes when a blank line, heading, paragraph, or the end of input
/// ends the run.
#[derive(Debug, Default)]
pub struct BlockAssembler {
    state: ListState,
    html: String,
}

impl BlockAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    /// Appends the HTML for one line.
    pub fn push(&mut self, line: ClassifiedLine<'_>) {
        match line.kind {
            LineKind::Blank => {
                self.close_list();
                self.html.push_str(LINE_BREAK);
            }
            LineKind::Heading2 => self.push_block("h2", line.content),
            LineKind::Heading3 => self.push_block("h3", line.content),
            LineKind::Paragraph => self.push_block("p", line.content),
            LineKind::ListItem => {
                if self.state == ListState::Outside {
                    self.html.push_str(LIST_OPEN);
                    self.state = ListState::InsideList;
                }
                // List items are emitted without the bold transform.
                self.push_wrapped("li", line.content);
            }
        }
    }

    /// Closes any open list and returns the accumulated HTML.
    pub fn finish(mut self) -> String {
        self.close_list();
        self.html
    }

    fn push_block(&mut self, tag: &str, content: &str) {
        self.close_list();
        let content = transform_inline(content);
        self.push_wrapped(tag, &content);
    }

    fn push_wrapped(&mut self, tag: &str, content: &str) {
        self.html.push('<');
        self.html.push_str(tag);
        self.html.push('>');
        self.html.push_str(content);
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push('>');
    }

    fn close_list(&mut self) {
        if self.state == ListState::InsideList {
            self.html.push_str(LIST_CLOSE);
            self.state = ListState::Outside;
        }
    }
}

/// Renders assistant markdown to an HTML fragment.
///
/// Total over all input: the empty string renders to the empty string, and
/// anything not recognized as structure becomes an escaped paragraph.
pub fn render_markdown(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let escaped = escape(markdown);
    let mut assembler = BlockAssembler::new();
    let mut lines = 0usize;
    for line in classify_lines(&escaped) {
        assembler.push(line);
        lines += 1;
    }
    let html = assembler.finish();

    trace!(lines, input_len = markdown.len(), output_len = html.len(), "Rendered markdown");
    html
}

/// Output modes for one assistant reply.
pub struct Renderer;

impl Renderer {
    /// Renders a reply to HTML for the chat surface.
    pub fn to_html(markdown: &str) -> String {
        render_markdown(markdown)
    }

    /// Renders a reply to plain text for speech output.
    pub fn to_speech(markdown: &str) -> String {
        crate::speech::speech_text(markdown)
    }
}
