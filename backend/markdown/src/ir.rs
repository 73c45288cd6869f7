//! Line Classification
//!
//! Assigns each line of an (already escaped) reply a [`LineKind`] based on its
//! prefix, producing the intermediate sequence the block assembler folds over.

use serde::Serialize;

/// Structural role of a single line.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Blank,
    Heading2,
    Heading3,
    ListItem,
    Paragraph,
}

/// A line together with the content left after its prefix.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: LineKind,
    pub content: &'a str,
}

impl<'a> ClassifiedLine<'a> {
    fn new(kind: LineKind, content: &'a str) -> Self {
        Self { kind, content }
    }
}

// Checked in this order: "### " must win over "## ".
const PREFIXES: [(&str, LineKind); 3] = [
    ("### ", LineKind::Heading3),
    ("## ", LineKind::Heading2),
    ("- ", LineKind::ListItem),
];

/// Whitespace stripped from both ends of a line: Unicode `White_Space` plus the
/// byte order mark, minus NEL (U+0085).
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Classifies one line. Surrounding whitespace is ignored; whitespace inside
/// the content is kept as written.
pub fn classify(line: &str) -> ClassifiedLine<'_> {
    let trimmed = line.trim_matches(is_trimmed);
    if trimmed.is_empty() {
        return ClassifiedLine::new(LineKind::Blank, "");
    }

    PREFIXES
        .iter()
        .find_map(|(prefix, kind)| {
            trimmed
                .strip_prefix(prefix)
                .map(|rest| ClassifiedLine::new(*kind, rest))
        })
        .unwrap_or(ClassifiedLine::new(LineKind::Paragraph, trimmed))
}

/// Splits text into lines and classifies each one.
pub fn classify_lines(text: &str) -> impl Iterator<Item = ClassifiedLine<'_>> {
    text.split('\n').map(classify)
}
