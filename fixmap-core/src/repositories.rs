// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    fn count_users(&self) -> Result<usize>;
}

pub trait CommunityRepo {
    fn create_community(&self, community: &Community) -> Result<()>;

    // Replaces all mutable fields; id, slug and admin are immutable.
    fn update_community(&self, community: &Community) -> Result<()>;

    fn get_community(&self, id: &Id) -> Result<Community>;
    fn get_community_by_slug(&self, slug: &str) -> Result<Community>;
    fn try_get_community_by_slug(&self, slug: &str) -> Result<Option<Community>>;

    // Ordered by creation time, newest first
    fn all_communities(&self) -> Result<Vec<Community>>;
    fn count_communities(&self) -> Result<usize>;
}

pub trait CommunityMemberRepo {
    // Fails with `AlreadyExists` for a duplicate (community, user) pair.
    fn add_community_member(&self, member: &CommunityMember) -> Result<()>;

    fn update_community_member_role(
        &self,
        community_id: &Id,
        user_id: &Id,
        role: MemberRole,
    ) -> Result<()>;

    fn try_get_community_member(
        &self,
        community_id: &Id,
        user_id: &Id,
    ) -> Result<Option<CommunityMember>>;

    fn community_members(&self, community_id: &Id) -> Result<Vec<CommunityMember>>;
    fn count_community_members(&self, community_id: &Id) -> Result<usize>;
}

pub trait ReportRepo {
    fn create_report(&self, report: &Report) -> Result<()>;
    fn update_report(&self, report: &Report) -> Result<()>;
    fn delete_report(&self, id: &Id) -> Result<()>;

    fn get_report(&self, id: &Id) -> Result<Report>;

    // Ordered by creation time, oldest first
    fn reports_of_community(&self, community_id: &Id) -> Result<Vec<Report>>;

    // Ordered by creation time, newest first
    fn all_reports(&self) -> Result<Vec<Report>>;

    fn count_reports(&self) -> Result<usize>;
}
