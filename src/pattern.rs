use std::str::FromStr;

use regex::Regex;

use crate::error::{Error, Result};

/// Delimiter conventionally wrapped around a pattern body, as in `/^foo/`
pub const DELIMITER: char = '/';

pub trait Pattern {
    fn matches(&self, key: &str) -> bool;
}

impl Pattern for Regex {
    fn matches(&self, key: &str) -> bool {
        self.is_match(key)
    }
}

/// Strips every leading and trailing delimiter from `pattern`.
pub fn strip_delimiters(pattern: &str) -> &str {
    pattern.trim_matches(DELIMITER)
}

/// A compiled regular expression used to filter collection keys.
///
/// Matching is a substring search: `foo` matches `a_foo_b`. Anchor the
/// pattern with `^` or `$` to match a prefix or suffix.
#[derive(Clone, Debug)]
pub struct KeyPattern {
    regex: Regex,
}

impl KeyPattern {
    /// Compile `pattern` after stripping its delimiters.
    pub fn new(pattern: &str) -> Result<Self> {
        let body = strip_delimiters(pattern);

        let regex = Regex::new(body).map_err(|err| {
            log::debug!("Rejected key pattern {:?}", pattern);
            Error::from(err)
        })?;

        log::debug!("Compiled key pattern {:?}", body);

        Ok(Self { regex })
    }

    /// The pattern body handed to the regex engine
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Pattern for KeyPattern {
    fn matches(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}

impl FromStr for KeyPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
