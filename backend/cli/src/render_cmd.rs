//! `render` and `speech` commands.

use anyhow::{Context, Result};
use tracing::debug;
use venturemind_markdown::{ClassifiedLine, Renderer, classify_lines, escape};

use crate::terminal_output::stream_write;

pub fn render(markdown: &str, lines: bool) -> Result<()> {
    let out = if lines {
        classified_json(markdown)?
    } else {
        Renderer::to_html(markdown)
    };
    debug!(input_len = markdown.len(), output_len = out.len(), lines, "Rendered input");
    write_line(&out)
}

pub fn speech(markdown: &str) -> Result<()> {
    write_line(&Renderer::to_speech(markdown))
}

/// The line stream the renderer folds over, after escaping.
fn classified_json(markdown: &str) -> Result<String> {
    let escaped = escape(markdown);
    let lines: Vec<ClassifiedLine<'_>> = if markdown.is_empty() {
        Vec::new()
    } else {
        classify_lines(&escaped).collect()
    };
    serde_json::to_string_pretty(&lines).context("Failed to serialize classified lines")
}

fn write_line(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stream_write(&mut stdout, text)?;
    stream_write(&mut stdout, "\n")?;
    Ok(())
}
