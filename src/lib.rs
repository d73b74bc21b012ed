//! # slackdown
//!
//! A fast, lightweight library for converting Slack-style chat markup
//! ("mrkdwn") into CommonMark-compatible Markdown.
//!
//! ## Features
//!
//! - Emoji shortcodes (`:thumbsup:` → 👍), with optional removal of
//!   shortcodes that don't resolve
//! - Channel references, user mentions, and `@here`/`@channel` broadcasts
//! - Named and unnamed hyperlinks, per-domain link templates, and image
//!   rendering for configured file extensions
//! - Bold/italic/strikethrough conversion with correct escaping of
//!   unpaired sigils — underscores inside URLs and shortcodes stay intact
//! - Bullet glyph (`•`) normalization
//!
//! ## Quick Start
//!
//! ```
//! use slackdown::Converter;
//!
//! let converter = Converter::default();
//!
//! assert_eq!(
//!     converter.convert("a *bold* statement in <#C1|general>"),
//!     "a **bold** statement in #general"
//! );
//! assert_eq!(
//!     converter.convert("read <http://site.com|this>"),
//!     "read [this](http://site.com)"
//! );
//! ```
//!
//! ## Configuration
//!
//! [`Config`] is an immutable settings structure with defaults for every
//! field; [`Converter::new`] validates it once, and conversion itself is a
//! total function — malformed markup degrades to literal text instead of
//! producing an error.
//!
//! ```
//! use slackdown::{Config, Converter};
//!
//! let config = Config::default()
//!     .with_user_template("U024BE7LH", "<a href=\"/u/024\">Jean Luc</a>")
//!     .with_image_template("<figure><img src=\"{}\"/></figure>");
//! let converter = Converter::new(config)?;
//!
//! assert_eq!(
//!     converter.convert("ping <@U024BE7LH>"),
//!     "ping <a href=\"/u/024\">Jean Luc</a>"
//! );
//! # Ok::<(), slackdown::Error>(())
//! ```

pub mod config;
pub mod converter;
pub mod error;

mod passes;
mod scan;

pub use config::{Config, EmojiLookup, default_emoji_lookup};
pub use converter::Converter;
pub use error::{Error, Result};
