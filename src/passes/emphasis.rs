//! Emphasis conversion and literal-sigil escaping.
//!
//! Source markup writes `*bold*` and `_italic_`; Markdown wants `**bold**`
//! and `*italic*`. The hard part is telling *paired* sigils (real emphasis)
//! apart from *unpaired* ones (literal characters that must be escaped so
//! they don't accidentally open emphasis in the output dialect).
//!
//! The pairing rule, preserved exactly from the source dialect:
//!
//! - an opener's preceding character (if any) is neither alphanumeric nor
//!   a backslash;
//! - a closer's following character (if any) is not alphanumeric, and the
//!   closer is not preceded by a backslash;
//! - content is non-empty and never spans a line break;
//! - scanning is leftmost-first, lazy (nearest valid closer wins), and
//!   non-overlapping.
//!
//! This is regex matching behavior, not a balanced-delimiter grammar:
//! `*a *b* c*` pairs the first available closer, not the outer sigils.
//!
//! Instead of swapping paired sigils out for placeholders and back, the
//! scanner resolves the text into typed spans up front: bold pairs first,
//! then italic pairs in the remaining text (an italic pair may contain
//! whole bold pairs, but never opens or closes inside one). Rendering then
//! walks the spans, escaping every leftover unescaped `*`, and every
//! leftover unescaped `_` that is not inside a URL or emoji shortcode —
//! underscores in those spans are not delimiters and must survive verbatim.

use std::ops::Range;

use memchr::{memchr, memchr2};

use crate::scan::{in_ranges, protected_ranges};

/// Byte positions of an opening and closing sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pair {
    open: usize,
    close: usize,
}

/// Convert paired `*`/`_` emphasis and escape the unpaired leftovers.
pub(crate) fn convert(text: &str) -> String {
    let bold = find_pairs(text, b'*', &[]);
    let italic = find_pairs(text, b'_', &bold);
    let protected = protected_ranges(text);

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut next_bold = 0;
    let mut cursor = 0;

    for it in &italic {
        // Bold pairs strictly before this italic span.
        while next_bold < bold.len() && bold[next_bold].open < it.open {
            let b = bold[next_bold];
            escape_into(text, cursor..b.open, &protected, &mut out);
            render_bold(text, b, &protected, &mut out);
            cursor = b.close + 1;
            next_bold += 1;
        }

        escape_into(text, cursor..it.open, &protected, &mut out);
        out.push('*');
        let mut inner = it.open + 1;
        // Bold pairs contained in the italic content.
        while next_bold < bold.len() && bold[next_bold].close < it.close {
            let b = bold[next_bold];
            escape_into(text, inner..b.open, &protected, &mut out);
            render_bold(text, b, &protected, &mut out);
            inner = b.close + 1;
            next_bold += 1;
        }
        escape_into(text, inner..it.close, &protected, &mut out);
        out.push('*');
        cursor = it.close + 1;
    }

    while next_bold < bold.len() {
        let b = bold[next_bold];
        escape_into(text, cursor..b.open, &protected, &mut out);
        render_bold(text, b, &protected, &mut out);
        cursor = b.close + 1;
        next_bold += 1;
    }
    escape_into(text, cursor..text.len(), &protected, &mut out);

    out
}

/// `~text~` → `~~text~~` under the same pairing rule. Unpaired tildes pass
/// through unchanged; the target dialect gives a lone `~` no meaning, so
/// there is nothing to escape.
pub(crate) fn strikethrough(text: &str) -> String {
    let pairs = find_pairs(text, b'~', &[]);
    if pairs.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + pairs.len() * 2);
    let mut cursor = 0;
    for p in &pairs {
        out.push_str(&text[cursor..p.open]);
        out.push_str("~~");
        out.push_str(&text[p.open + 1..p.close]);
        out.push_str("~~");
        cursor = p.close + 1;
    }
    out.push_str(&text[cursor..]);
    out
}

fn render_bold(text: &str, pair: Pair, protected: &[Range<usize>], out: &mut String) {
    out.push_str("**");
    escape_into(text, pair.open + 1..pair.close, protected, out);
    out.push_str("**");
}

/// Copy `range` into `out`, escaping unescaped `*` everywhere and
/// unescaped `_` outside protected URL/shortcode spans.
fn escape_into(text: &str, range: Range<usize>, protected: &[Range<usize>], out: &mut String) {
    for (i, c) in text[range.clone()].char_indices() {
        let pos = range.start + i;
        let already_escaped = prev_char(text, pos) == Some('\\');
        match c {
            '*' if !already_escaped => {
                out.push('\\');
                out.push(c);
            }
            '_' if !already_escaped && !in_ranges(protected, pos) => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}

/// Leftmost-first, lazy, non-overlapping pair scan for a one-byte sigil.
///
/// `blocked` spans (pairs of a kind already resolved) are opaque: no sigil
/// inside one can open or close, but a closer search jumps over them, so a
/// later kind can wrap an earlier pair whole.
fn find_pairs(text: &str, sigil: u8, blocked: &[Pair]) -> Vec<Pair> {
    let bytes = text.as_bytes();
    let mut pairs = Vec::new();
    let mut pos = 0;

    'scan: while pos < bytes.len() {
        let Some(offset) = memchr(sigil, &bytes[pos..]) else {
            break;
        };
        let open = pos + offset;
        if let Some(span) = blocked_containing(blocked, open) {
            pos = span.close + 1;
            continue;
        }
        if !can_open(text, open) {
            pos = open + 1;
            continue;
        }

        let mut search = open + 1;
        while let Some(offset) = memchr2(sigil, b'\n', &bytes[search..]) {
            let at = search + offset;
            if bytes[at] == b'\n' {
                break; // pairs never span lines
            }
            if let Some(span) = blocked_containing(blocked, at) {
                search = span.close + 1;
                continue;
            }
            if at > open + 1 && can_close(text, at) {
                pairs.push(Pair { open, close: at });
                pos = at + 1;
                continue 'scan;
            }
            search = at + 1;
        }

        // No closer on this line: the sigil is literal.
        pos = open + 1;
    }

    pairs
}

fn blocked_containing(blocked: &[Pair], idx: usize) -> Option<Pair> {
    blocked
        .iter()
        .copied()
        .find(|p| p.open <= idx && idx <= p.close)
}

fn can_open(text: &str, idx: usize) -> bool {
    match prev_char(text, idx) {
        None => true,
        Some(c) => !c.is_alphanumeric() && c != '\\',
    }
}

fn can_close(text: &str, idx: usize) -> bool {
    if prev_char(text, idx) == Some('\\') {
        return false;
    }
    match next_char(text, idx) {
        None => true,
        Some(c) => !c.is_alphanumeric(),
    }
}

fn prev_char(text: &str, idx: usize) -> Option<char> {
    text[..idx].chars().next_back()
}

fn next_char(text: &str, idx: usize) -> Option<char> {
    // Sigils are one byte, so idx + 1 is a char boundary.
    text[idx + 1..].chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_pairs_and_trailing_literal() {
        assert_eq!(
            convert("a *test* of *bolding a string* and *extra"),
            "a **test** of **bolding a string** and \\*extra"
        );
    }

    #[test]
    fn test_user_escapes_survive_unchanged() {
        assert_eq!(
            convert("a *test* \\*of\\* *bolding a string* and *extra"),
            "a **test** \\*of\\* **bolding a string** and \\*extra"
        );
    }

    #[test]
    fn test_no_pair_when_adjacent_to_alphanumerics() {
        assert_eq!(convert("does* not* *bold"), "does\\* not\\* \\*bold");
    }

    #[test]
    fn test_only_valid_pair_converts() {
        assert_eq!(
            convert("another* test* *of* *bold"),
            "another\\* test\\* **of** \\*bold"
        );
    }

    #[test]
    fn test_pairs_never_span_lines() {
        assert_eq!(
            convert("another* test* *of* *bold\n*and newline*"),
            "another\\* test\\* **of** \\*bold\n**and newline**"
        );
    }

    #[test]
    fn test_content_may_start_with_whitespace() {
        assert_eq!(
            convert("* spaced* asterisk* \n*newline"),
            "** spaced** asterisk\\* \n\\*newline"
        );
    }

    #[test]
    fn test_italic_pairs_and_trailing_literal() {
        assert_eq!(
            convert("a _test_ of _italicizing a string_ and _extra"),
            "a *test* of *italicizing a string* and \\_extra"
        );
    }

    #[test]
    fn test_no_italic_when_adjacent_to_alphanumerics() {
        assert_eq!(convert("does_ not_ _italicize"), "does\\_ not\\_ \\_italicize");
    }

    #[test]
    fn test_lazy_pairing_swallows_inner_sigil() {
        assert_eq!(
            convert("*a *bold* and_ an _italic_"),
            "**a \\*bold** and\\_ an *italic*"
        );
    }

    #[test]
    fn test_inner_underscore_escaped_inside_italic() {
        assert_eq!(
            convert("*a *bold* and _an _italic_"),
            "**a \\*bold** and *an \\_italic*"
        );
    }

    #[test]
    fn test_first_available_pairing_not_outer() {
        // Inherited regex-style behavior: not a balanced grammar.
        assert_eq!(convert("*a *b* c*"), "**a \\*b** c\\*");
    }

    #[test]
    fn test_italic_may_wrap_whole_bold_pair() {
        assert_eq!(convert("_a *b* c_"), "*a **b** c*");
    }

    #[test]
    fn test_underscore_inside_url_not_escaped() {
        assert_eq!(
            convert("see http://site.com/my_thing/ here"),
            "see http://site.com/my_thing/ here"
        );
    }

    #[test]
    fn test_underscore_inside_shortcode_not_escaped() {
        assert_eq!(
            convert("a :slightly_smiling_face: and _extra"),
            "a :slightly_smiling_face: and \\_extra"
        );
    }

    #[test]
    fn test_strikethrough_pairs() {
        assert_eq!(
            strikethrough("a ~test~ of ~striking a string~ and ~extra"),
            "a ~~test~~ of ~~striking a string~~ and ~extra"
        );
    }

    #[test]
    fn test_strikethrough_unpaired_untouched() {
        assert_eq!(
            strikethrough("does~ not~ ~strikethrough"),
            "does~ not~ ~strikethrough"
        );
    }
}
