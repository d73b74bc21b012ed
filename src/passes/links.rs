//! Image and hyperlink passes.
//!
//! Source markup wraps every link in angle brackets: `<url>`, `<url|name>`,
//! or (when enabled) the bracket-first `[name]<url>` form. These passes
//! rewrite them to Markdown links, with two layers of overrides:
//!
//! - URLs whose path extension matches a configured image extension become
//!   images (`![](url)` or the configured image template). The extension
//!   check wins over link templates.
//! - Otherwise, the first configured link-template key occurring within the
//!   URL selects that template instead of the default `[name](url)`.
//!
//! Angle constructs whose content is not a recognized URL are left exactly
//! as written, so later passes (and plain `<html>` fragments) still see them.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::{Config, render_template};
use crate::scan::is_url;

static ANGLE_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>|\s]+)>").expect("angle pattern is valid"));

static ANGLE_NAMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>|\s]+)\|([^<>|]*)>").expect("angle pattern is valid"));

static BRACKET_NAMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Za-z ]+)\]<([^<>|\s]+)>").expect("bracket pattern is valid"));

/// `<url>` with an image extension → image rendering.
pub(crate) fn images(text: &str, config: &Config) -> String {
    ANGLE_BARE
        .replace_all(text, |caps: &Captures| {
            let url = &caps[1];
            if is_url(url) && is_image(url, &config.image_extensions) {
                match &config.image_template {
                    Some(template) => render_template(template, url),
                    None => format!("![]({url})"),
                }
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// `<url|name>` → `[name](url)`, plus the `[name]<url>` alternate syntax.
pub(crate) fn named(text: &str, config: &Config) -> String {
    let mut text = ANGLE_NAMED
        .replace_all(text, |caps: &Captures| {
            let (url, name) = (&caps[1], &caps[2]);
            if is_url(url) {
                render_link(config, url, name)
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();

    if config.allow_bracket_links {
        text = BRACKET_NAMED
            .replace_all(&text, |caps: &Captures| {
                let (name, url) = (&caps[1], &caps[2]);
                if is_url(url) {
                    render_link(config, url, name)
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned();
    }

    text
}

/// `<url>` (everything the image pass left behind) → `[url](url)`.
pub(crate) fn unnamed(text: &str, config: &Config) -> String {
    ANGLE_BARE
        .replace_all(text, |caps: &Captures| {
            let url = &caps[1];
            if is_url(url) {
                match config.link_template_for(url) {
                    Some(template) => render_template(template, url),
                    None => format!("[{url}]({url})"),
                }
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn render_link(config: &Config, url: &str, name: &str) -> String {
    match config.link_template_for(url) {
        Some(template) => render_template(template, url),
        None => format!("[{name}]({url})"),
    }
}

/// Whether the URL's path extension matches a configured image extension,
/// ignoring case and any query or fragment.
fn is_image(url: &str, extensions: &[String]) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next().unwrap_or(path);
    let Some(dot) = name.rfind('.') else {
        return false;
    };
    let ext = &name[dot + 1..];
    !ext.is_empty()
        && extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
}
