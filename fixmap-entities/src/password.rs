use std::{fmt, str::FromStr};

use thiserror::Error;

/// A bcrypt password hash.
///
/// Parsing hashes the cleartext, so a `Password` never
/// contains the original input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Password(String);

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, password: &str) -> bool {
        pwhash::bcrypt::verify(password, &self.0)
    }
}

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct PasswordParseError;

impl FromStr for Password {
    type Err = PasswordParseError;

    fn from_str(password: &str) -> Result<Self, Self::Err> {
        if password.len() < Password::min_len() {
            return Err(PasswordParseError);
        }
        let hash = pwhash::bcrypt::hash(password).map_err(|_| PasswordParseError)?;
        let res = Self(hash);
        debug_assert!(res.verify(password));
        Ok(res)
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.0)
    }
}
