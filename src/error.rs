//! Error types for slackdown configuration.

use thiserror::Error;

/// Errors reported when constructing a [`Converter`](crate::Converter).
///
/// Conversion itself is total and never fails; the only fault category is
/// configuration misuse, caught up front so it cannot surface mid-conversion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("link template for `{key}` must contain exactly one `{{}}` slot")]
    InvalidLinkTemplate { key: String },

    #[error("image template must contain exactly one `{{}}` slot")]
    InvalidImageTemplate,
}

pub type Result<T> = std::result::Result<T, Error>;
