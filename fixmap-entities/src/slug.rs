use std::{borrow::Borrow, fmt, str::FromStr};

use thiserror::Error;

/// URL-safe identifier of a community.
///
/// Globally unique and immutable after creation. Consists of lowercase
/// ASCII letters, digits and interior dashes.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Slug(String);

impl Slug {
    pub const fn new_unchecked(slug: String) -> Self {
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn is_valid_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid slug")]
pub struct SlugParseError;

impl FromStr for Slug {
    type Err = SlugParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.starts_with('-') || s.ends_with('-') {
            return Err(SlugParseError);
        }
        if !s.chars().all(Self::is_valid_char) {
            return Err(SlugParseError);
        }
        Ok(Self(s.to_owned()))
    }
}

impl From<Slug> for String {
    fn from(from: Slug) -> Self {
        from.0
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}
