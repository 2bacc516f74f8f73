use super::{
    authorize::{community_access, Access},
    prelude::*,
};

/// Loads a community together with the access level of the
/// requesting user (if any).
pub fn get_community<R>(
    repo: &R,
    slug: &str,
    user_id: Option<&Id>,
) -> Result<(Community, Access)>
where
    R: CommunityRepo + CommunityMemberRepo,
{
    let community = repo.get_community_by_slug(slug)?;
    let access = community_access(repo, &community, user_id)?;
    Ok((community, access))
}

pub fn all_communities<R: CommunityRepo>(repo: &R) -> Result<Vec<Community>> {
    Ok(repo.all_communities()?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use fixmap_entities::builders::Builder;

    #[test]
    fn admin_by_id_is_member_and_admin() {
        let db = MockDb::default();
        let admin = Id::new();
        let community = Community::build().slug("mytown").admin_id(admin.as_str()).finish();
        db.communities.borrow_mut().push(community);

        let (_, access) = get_community(&db, "mytown", Some(&admin)).unwrap();
        assert!(access.is_member());
        assert!(access.is_admin());

        let (_, access) = get_community(&db, "mytown", None).unwrap();
        assert!(!access.is_member());
        assert!(!access.is_admin());
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let db = MockDb::default();
        assert!(matches!(
            get_community(&db, "nowhere", None),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
