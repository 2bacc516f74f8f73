//! # fixmap-core
//!
//! Repository abstractions and use cases of the fixmap backend.

pub mod entities {
    pub use fixmap_entities::{
        community::*, email::*, geo::*, id::*, member::*, password::*, report::*, slug::*,
        time::*, url::Url, user::*,
    };
}

pub mod db;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use self::repositories::Error as RepoError;
