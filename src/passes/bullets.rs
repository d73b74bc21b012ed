//! Bullet glyph rewriting.

/// Replace the `•` bullet glyph with `+`, inserting a space when the glyph
/// is jammed against the following word. Existing whitespace is kept as-is.
pub(crate) fn convert(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '•' {
            out.push(c);
            continue;
        }
        out.push('+');
        if let Some(next) = chars.peek()
            && !next.is_whitespace()
        {
            out.push(' ');
        }
    }

    out
}
