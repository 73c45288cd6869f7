//! HTML Escaping
//!
//! Neutralizes the characters that could open an element or an entity.

/// Escapes `&`, `<` and `>` for embedding in HTML text content.
///
/// Equivalent to replacing `&` first, then `<`, then `>`: a single pass never
/// revisits its own output, so entities it introduces are not escaped twice.
/// Quotes are left alone; the output is only ever used as element text.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
