//! The conversion pipeline.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::passes::{bullets, emoji, emphasis, links, mentions};

/// Converts source chat markup to CommonMark-style Markdown.
///
/// A converter holds immutable, validated configuration; every
/// [`convert`](Converter::convert) call owns its working string, so one
/// instance can be shared freely across threads.
///
/// ```
/// use slackdown::Converter;
///
/// let converter = Converter::default();
/// assert_eq!(converter.convert("a *bold* move"), "a **bold** move");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Build a converter, validating the configuration up front.
    ///
    /// Template mistakes (a link or image template without exactly one `{}`
    /// slot) are reported here rather than surfacing mid-conversion.
    pub fn new(config: Config) -> Result<Self> {
        for (key, template) in &config.link_templates {
            if template.matches("{}").count() != 1 {
                return Err(Error::InvalidLinkTemplate { key: key.clone() });
            }
        }
        if let Some(template) = &config.image_template
            && template.matches("{}").count() != 1
        {
            return Err(Error::InvalidImageTemplate);
        }
        Ok(Self { config })
    }

    /// The configuration this converter was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert one message. Total: malformed or unbalanced markup is passed
    /// through or degraded to a safe literal form, never rejected.
    ///
    /// The pass order is fixed. URL-producing passes must precede emphasis
    /// (URLs may contain underscores that must not be escaped), and the
    /// image pass must precede the generic hyperlink passes.
    pub fn convert(&self, input: &str) -> String {
        let mut text = input.to_string();

        if self.config.replace_emoji {
            text = emoji::replace(&text, self.config.emoji_lookup);
            if self.config.remove_bad_emoji {
                text = emoji::remove_unresolved(&text);
            }
        }
        text = links::images(&text, &self.config);
        text = mentions::channels(&text);
        text = mentions::announcements(&text);
        text = links::named(&text, &self.config);
        text = links::unnamed(&text, &self.config);
        text = mentions::users(&text, &self.config);
        text = emphasis::convert(&text);
        text = emphasis::strikethrough(&text);
        text = bullets::convert(&text);

        text
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            config: Config::default(),
        }
    }
}
