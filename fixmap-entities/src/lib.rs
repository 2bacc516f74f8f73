#![deny(missing_debug_implementations)]

//! # fixmap-entities
//!
//! Reusable, agnostic domain entities for fixmap.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod community;
pub mod email;
pub mod geo;
pub mod id;
pub mod member;
pub mod password;
pub mod report;
pub mod slug;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
