mod authorize;
mod create_community;
mod create_report;
mod delete_report;
mod error;
mod get_community;
mod get_report;
mod join_community;
mod load_reports;
mod login;
mod register;
mod update_community;
mod update_report;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, create_community::*, create_report::*, delete_report::*, error::Error,
    get_community::*, get_report::*, join_community::*, load_reports::*, login::*, register::*,
    update_community::*, update_report::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*, RepoError};
}
