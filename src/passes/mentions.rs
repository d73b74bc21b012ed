//! Channel references, broadcast announcements, and user mentions.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::Config;

static CHANNEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<#([^<>|]*)\|([^<>|]*)>").expect("channel pattern is valid"));

static ANNOUNCEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!([^<>|\s]+)>").expect("announcement pattern is valid"));

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@([^<>\s]+)>").expect("mention pattern is valid"));

/// `<#channel-id|display-name>` → `#display-name`.
pub(crate) fn channels(text: &str) -> String {
    CHANNEL.replace_all(text, "#$2").into_owned()
}

/// `<!token>` → a broadcast-mention rendering, kept distinct from a user
/// mention so downstream styling can tell `@here`/`@channel` apart.
pub(crate) fn announcements(text: &str) -> String {
    ANNOUNCEMENT
        .replace_all(text, "<span class=\"slack-announcement\">@$1</span>")
        .into_owned()
}

/// `<@user-id>` → the configured rendering, or a literal `@user-id`.
pub(crate) fn users(text: &str, config: &Config) -> String {
    MENTION
        .replace_all(text, |caps: &Captures| {
            match config.user_templates.get(&caps[1]) {
                Some(rendered) => rendered.clone(),
                None => format!("@{}", &caps[1]),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel() {
        assert_eq!(
            channels("test <#channelid|channel-name> test"),
            "test #channel-name test"
        );
    }

    #[test]
    fn test_announcement_here() {
        assert_eq!(
            announcements("... <!here> ..."),
            "... <span class=\"slack-announcement\">@here</span> ..."
        );
    }

    #[test]
    fn test_announcement_channel() {
        assert_eq!(
            announcements("<!channel> ..."),
            "<span class=\"slack-announcement\">@channel</span> ..."
        );
    }

    #[test]
    fn test_user_with_template() {
        let config = Config::default()
            .with_user_template("someusercode", "<a href=\"http://user.com\">Some User</a>");
        assert_eq!(
            users("... <@someusercode> ...", &config),
            "... <a href=\"http://user.com\">Some User</a> ..."
        );
    }

    #[test]
    fn test_user_without_table_degrades() {
        assert_eq!(
            users("... <@someusercode> ...", &Config::default()),
            "... @someusercode ..."
        );
    }

    #[test]
    fn test_user_missing_from_table_degrades() {
        let config = Config::default().with_user_template("other", "Other");
        assert_eq!(users("<@someusercode>", &config), "@someusercode");
    }
}
