//! The rewrite passes.
//!
//! Each pass is a pure `&str → String` transformation over the working
//! string; passes only communicate through that string. The pipeline order
//! lives in [`Converter::convert`](crate::Converter::convert) and is
//! significant:
//!
//! - emoji runs first so later passes see glyphs instead of shortcodes;
//! - image runs before the hyperlink passes so image URLs are consumed
//!   before the generic `<url>` rule sees them;
//! - every URL-introducing pass runs before emphasis, which must treat URLs
//!   and leftover shortcodes as opaque when escaping underscores;
//! - strikethrough and bullets are independent of the rest and run last by
//!   convention.

pub(crate) mod bullets;
pub(crate) mod emoji;
pub(crate) mod emphasis;
pub(crate) mod links;
pub(crate) mod mentions;
