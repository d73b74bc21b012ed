//! Recognizers for URLs and emoji shortcodes.
//!
//! Both the link passes and the emphasis pass need to agree on what counts
//! as a URL: the link passes to decide whether an angle-bracket construct is
//! a hyperlink at all, the emphasis pass to leave underscores inside URLs
//! and shortcodes unescaped. Keeping the grammar in one place guarantees the
//! two views never drift apart.
//!
//! The URL grammar is deliberately permissive, matching the messy URLs that
//! show up in real chat messages: scheme-prefixed (`https://…`), bare
//! `www.`-prefixed, and bare `domain.tld/path` forms all count. Trailing
//! sentence punctuation immediately after a URL is excluded from the match.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        \b
        (?:
            [a-z][a-z0-9+.-]* :// [^\s<>|]+                                  # scheme-prefixed
          | www\. [^\s<>|]+                                                  # bare www
          | [a-z0-9][a-z0-9-]* (?: \. [a-z0-9-]+ )* \. [a-z]{2,}             # bare domain
            (?: / [^\s<>|]* )?
        )",
    )
    .expect("URL pattern is valid")
});

static URL_EXACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        \A
        (?:
            [a-z][a-z0-9+.-]* :// [^\s<>|]+
          | www\. [^\s<>|]+
          | [a-z0-9][a-z0-9-]* (?: \. [a-z0-9-]+ )* \. [a-z]{2,}
            (?: / [^\s<>|]* )?
        )
        \z",
    )
    .expect("URL pattern is valid")
});

/// Shortcode body: alphanumerics (unicode, so accented aliases work) plus
/// the punctuation the common chat shortcode sets use.
pub(crate) const SHORTCODE_BODY: &str = r"[\w+\-&.()!#*]+";

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(":({SHORTCODE_BODY}):")).expect("shortcode pattern is valid"));

/// Sentence punctuation and closing brackets that end a sentence rather
/// than a URL.
const TRAILING_PUNCT: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', ')', ']', '}'];

/// Whether `text` is, in its entirety, a recognized URL.
pub(crate) fn is_url(text: &str) -> bool {
    URL_EXACT.is_match(text)
}

/// The emoji shortcode pattern, shared with the emoji pass.
pub(crate) fn shortcode_pattern() -> &'static Regex {
    &SHORTCODE
}

/// Byte ranges of every URL and emoji shortcode in `text`, sorted by start.
///
/// Underscores inside these ranges are not emphasis delimiters and must
/// never be escaped.
pub(crate) fn protected_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for m in URL.find_iter(text) {
        let trimmed = m.as_str().trim_end_matches(TRAILING_PUNCT);
        if !trimmed.is_empty() {
            ranges.push(m.start()..m.start() + trimmed.len());
        }
    }
    for m in SHORTCODE.find_iter(text) {
        ranges.push(m.range());
    }

    ranges.sort_by_key(|r| r.start);
    ranges
}

/// Whether byte position `pos` falls inside any of `ranges`.
pub(crate) fn in_ranges(ranges: &[Range<usize>], pos: usize) -> bool {
    ranges.iter().any(|r| r.contains(&pos))
}
