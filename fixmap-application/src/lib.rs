//! # fixmap-application
//!
//! Transactional flows that compose the use cases of `fixmap-core`
//! over a database connection pool. Every mutating flow runs inside
//! a single exclusive transaction.

mod create_community;
mod create_report;
mod delete_report;
mod join_community;
mod update_community;
mod update_report;

pub mod prelude {
    pub use super::{
        create_community::*, create_report::*, delete_report::*, join_community::*,
        update_community::*, update_report::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use fixmap_core::{entities::*, usecases};

#[cfg(test)]
mod tests;

pub mod sqlite {
    pub use fixmap_db_sqlite::Connections;
}
