use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::{id::Id, time::Timestamp};

pub type MemberRolePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MemberRole {
    Member = 0,
    Admin  = 1,
}

impl MemberRole {
    pub const fn default() -> Self {
        Self::Member
    }
}

#[derive(Debug, Error)]
#[error("Invalid member role primitive: {0}")]
pub struct InvalidMemberRolePrimitive(MemberRolePrimitive);

impl TryFrom<MemberRolePrimitive> for MemberRole {
    type Error = InvalidMemberRolePrimitive;
    fn try_from(from: MemberRolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidMemberRolePrimitive(from))
    }
}

impl From<MemberRole> for MemberRolePrimitive {
    fn from(from: MemberRole) -> Self {
        from.to_i16().expect("member role primitive")
    }
}

/// Membership of a user in a community.
///
/// The (community, user) pair is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityMember {
    pub community_id: Id,
    pub user_id: Id,
    pub role: MemberRole,
    pub created_at: Timestamp,
}
