use super::prelude::*;

/// Access level of a user with respect to a community or one of
/// its reports.
///
/// `CommunityAdmin` (the user referenced by the community's `admin_id`)
/// takes precedence over `MemberAdmin` (an admin-role membership).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    None,
    Member,
    MemberAdmin,
    CommunityAdmin,
    Owner,
}

impl Access {
    pub const fn is_member(self) -> bool {
        matches!(self, Self::Member | Self::MemberAdmin | Self::CommunityAdmin)
    }

    pub const fn is_admin(self) -> bool {
        matches!(self, Self::MemberAdmin | Self::CommunityAdmin)
    }

    pub const fn can_moderate(self) -> bool {
        matches!(self, Self::Owner | Self::MemberAdmin | Self::CommunityAdmin)
    }
}

pub fn community_access<R>(
    repo: &R,
    community: &Community,
    user_id: Option<&Id>,
) -> Result<Access>
where
    R: CommunityMemberRepo,
{
    let Some(user_id) = user_id else {
        return Ok(Access::None);
    };
    if community.admin_id == *user_id {
        return Ok(Access::CommunityAdmin);
    }
    Ok(
        match repo.try_get_community_member(&community.id, user_id)? {
            Some(member) if member.role == MemberRole::Admin => Access::MemberAdmin,
            Some(_) => Access::Member,
            None => Access::None,
        },
    )
}

pub fn report_access<R>(
    repo: &R,
    community: Option<&Community>,
    report: &Report,
    user_id: &Id,
) -> Result<Access>
where
    R: CommunityMemberRepo,
{
    if report.created_by == *user_id {
        return Ok(Access::Owner);
    }
    match community {
        Some(community) => community_access(repo, community, Some(user_id)),
        None => Ok(Access::None),
    }
}
