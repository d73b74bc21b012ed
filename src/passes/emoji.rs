//! Emoji shortcode substitution.
//!
//! Replaces `:shortcode:` tokens with their glyphs via the configured
//! lookup. Tokens the lookup cannot resolve stay verbatim unless bad-emoji
//! removal is enabled, in which case whole runs of unresolved tokens vanish
//! along with their surrounding whitespace — adjacent tokens collapse to
//! nothing rather than leaving stray spaces behind.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::EmojiLookup;
use crate::scan::{SHORTCODE_BODY, shortcode_pattern};

/// A run of shortcode-like tokens plus the horizontal whitespace around it.
/// Newlines stay out of the match so removal never joins lines.
static UNRESOLVED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:[^\S\n]*:{SHORTCODE_BODY}:)+[^\S\n]*"))
        .expect("shortcode run pattern is valid")
});

/// Substitute every resolvable `:shortcode:` with its glyph.
pub(crate) fn replace(text: &str, lookup: EmojiLookup) -> String {
    shortcode_pattern()
        .replace_all(text, |caps: &Captures| match lookup(&caps[1]) {
            Some(glyph) => glyph.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Delete runs of shortcode-like tokens that survived substitution.
///
/// Runs in the middle of a line collapse to a single space; runs touching
/// the start or end of a line (or of the whole text) disappear entirely.
pub(crate) fn remove_unresolved(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in UNRESOLVED_RUN.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        let at_line_start = out.is_empty() || out.ends_with('\n');
        let at_line_end = m.end() == text.len() || text[m.end()..].starts_with('\n');
        if !at_line_start && !at_line_end {
            out.push(' ');
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
