use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// A membership already existed; nothing was inserted.
    AlreadyMember(MemberRole),
    /// A new membership with the default role was created.
    Joined(MemberRole),
}

impl JoinOutcome {
    pub const fn role(self) -> MemberRole {
        match self {
            Self::AlreadyMember(role) | Self::Joined(role) => role,
        }
    }
}

/// Joins a community. Idempotent: re-joining returns the existing
/// membership role instead of failing.
pub fn join_community<R>(repo: &R, slug: &str, user_id: &Id) -> Result<JoinOutcome>
where
    R: CommunityRepo + CommunityMemberRepo,
{
    let mut community = repo.get_community_by_slug(slug)?;
    if !community.is_active {
        return Err(Error::CommunityInactive);
    }
    if let Some(member) = repo.try_get_community_member(&community.id, user_id)? {
        return Ok(JoinOutcome::AlreadyMember(member.role));
    }
    let member = CommunityMember {
        community_id: community.id.clone(),
        user_id: user_id.clone(),
        role: MemberRole::default(),
        created_at: Timestamp::now(),
    };
    repo.add_community_member(&member)?;
    community.member_count += 1;
    repo.update_community(&community)?;
    log::debug!(
        "User {} joined community {} as {}",
        user_id,
        community.slug,
        member.role
    );
    Ok(JoinOutcome::Joined(member.role))
}
