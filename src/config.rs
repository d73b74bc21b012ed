//! Converter configuration.
//!
//! [`Config`] is an immutable settings structure: build it once (defaults
//! plus `with_*` methods), hand it to [`Converter::new`](crate::Converter::new),
//! and it is never mutated afterwards. Conversion reads it, nothing writes it.

use std::collections::HashMap;

/// Shortcode → glyph lookup, the one external collaborator of the pipeline.
///
/// Given a shortcode name without its colons (`"thumbsup"`), returns the
/// glyph it names, or `None` when the shortcode is unknown.
pub type EmojiLookup = fn(&str) -> Option<&'static str>;

/// The default lookup, backed by the gemoji shortcode registry.
pub fn default_emoji_lookup(shortcode: &str) -> Option<&'static str> {
    emojis::get_by_shortcode(shortcode).map(|e| e.as_str())
}

/// Settings for a [`Converter`](crate::Converter).
///
/// All fields are public and all have defaults, so a config can be built
/// either with struct update syntax or with the `with_*` builders:
///
/// ```
/// use slackdown::Config;
///
/// let config = Config::default()
///     .with_user_template("U024BE7LH", "<a href=\"/u/024\">Jean Luc</a>")
///     .with_link_template("twitter.com", "<blockquote><a href=\"{}\"></a></blockquote>");
///
/// assert!(config.replace_emoji);
/// assert_eq!(config.link_templates.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Substitute `:shortcode:` tokens with their glyphs.
    pub replace_emoji: bool,
    /// Delete runs of shortcode-like tokens that did not resolve.
    pub remove_bad_emoji: bool,
    /// Accept the `[name]<url>` named-link syntax in addition to `<url|name>`.
    pub allow_bracket_links: bool,
    /// Per-domain link rendering overrides, consulted in order: the first
    /// key that occurs within a URL wins. Each template takes the URL in a
    /// single `{}` slot.
    pub link_templates: Vec<(String, String)>,
    /// Mention resolution table: user id → rendered replacement.
    pub user_templates: HashMap<String, String>,
    /// Override for image rendering (single `{}` slot for the URL);
    /// `None` renders the literal `![](url)`.
    pub image_template: Option<String>,
    /// File extensions whose URLs are treated as images. Compared
    /// case-insensitively; a leading dot is accepted but not required.
    pub image_extensions: Vec<String>,
    /// Shortcode → glyph lookup used by the emoji pass.
    pub emoji_lookup: EmojiLookup,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            replace_emoji: true,
            remove_bad_emoji: false,
            allow_bracket_links: true,
            link_templates: Vec::new(),
            user_templates: HashMap::new(),
            image_template: None,
            image_extensions: vec![".jpg".to_string(), ".png".to_string()],
            emoji_lookup: default_emoji_lookup,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a per-domain link template. `key` is matched as a substring of
    /// the URL; `template` must contain exactly one `{}` slot.
    pub fn with_link_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.link_templates.push((key.into(), template.into()));
        self
    }

    /// Add a user mention rendering.
    pub fn with_user_template(mut self, user_id: impl Into<String>, rendered: impl Into<String>) -> Self {
        self.user_templates.insert(user_id.into(), rendered.into());
        self
    }

    /// Override image rendering. The template must contain exactly one
    /// `{}` slot.
    pub fn with_image_template(mut self, template: impl Into<String>) -> Self {
        self.image_template = Some(template.into());
        self
    }

    /// Add a file extension to treat as an image.
    pub fn with_image_extension(mut self, extension: impl Into<String>) -> Self {
        self.image_extensions.push(extension.into());
        self
    }

    /// Replace the emoji lookup backend.
    pub fn with_emoji_lookup(mut self, lookup: EmojiLookup) -> Self {
        self.emoji_lookup = lookup;
        self
    }

    pub fn with_replace_emoji(mut self, enabled: bool) -> Self {
        self.replace_emoji = enabled;
        self
    }

    pub fn with_remove_bad_emoji(mut self, enabled: bool) -> Self {
        self.remove_bad_emoji = enabled;
        self
    }

    pub fn with_bracket_links(mut self, enabled: bool) -> Self {
        self.allow_bracket_links = enabled;
        self
    }

    /// The first configured link template whose key occurs within `url`.
    pub(crate) fn link_template_for(&self, url: &str) -> Option<&str> {
        self.link_templates
            .iter()
            .find(|(key, _)| url.contains(key.as_str()))
            .map(|(_, template)| template.as_str())
    }
}

/// Render a validated single-slot template with `url`.
pub(crate) fn render_template(template: &str, url: &str) -> String {
    template.replacen("{}", url, 1)
}
