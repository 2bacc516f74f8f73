use std::cell::RefCell;

use super::prelude::*;

/// In-memory database for use case unit tests.
#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub communities: RefCell<Vec<Community>>,
    pub community_members: RefCell<Vec<CommunityMember>>,
    pub reports: RefCell<Vec<Report>>,
}

type RepoResult<T> = std::result::Result<T, RepoError>;

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.id == user.id || u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    fn get_user(&self, id: &Id) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == *id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl CommunityRepo for MockDb {
    fn create_community(&self, community: &Community) -> RepoResult<()> {
        let mut communities = self.communities.borrow_mut();
        if communities
            .iter()
            .any(|c| c.id == community.id || c.slug == community.slug)
        {
            return Err(RepoError::AlreadyExists);
        }
        communities.push(community.clone());
        Ok(())
    }

    fn update_community(&self, community: &Community) -> RepoResult<()> {
        let mut communities = self.communities.borrow_mut();
        let existing = communities
            .iter_mut()
            .find(|c| c.id == community.id)
            .ok_or(RepoError::NotFound)?;
        *existing = community.clone();
        Ok(())
    }

    fn get_community(&self, id: &Id) -> RepoResult<Community> {
        self.communities
            .borrow()
            .iter()
            .find(|c| c.id == *id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_community_by_slug(&self, slug: &str) -> RepoResult<Community> {
        self.try_get_community_by_slug(slug)?.ok_or(RepoError::NotFound)
    }

    fn try_get_community_by_slug(&self, slug: &str) -> RepoResult<Option<Community>> {
        Ok(self
            .communities
            .borrow()
            .iter()
            .find(|c| c.slug.as_str() == slug)
            .cloned())
    }

    fn all_communities(&self) -> RepoResult<Vec<Community>> {
        let mut communities = self.communities.borrow().clone();
        communities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(communities)
    }

    fn count_communities(&self) -> RepoResult<usize> {
        Ok(self.communities.borrow().len())
    }
}

impl CommunityMemberRepo for MockDb {
    fn add_community_member(&self, member: &CommunityMember) -> RepoResult<()> {
        let mut members = self.community_members.borrow_mut();
        if members
            .iter()
            .any(|m| m.community_id == member.community_id && m.user_id == member.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        members.push(member.clone());
        Ok(())
    }

    fn update_community_member_role(
        &self,
        community_id: &Id,
        user_id: &Id,
        role: MemberRole,
    ) -> RepoResult<()> {
        let mut members = self.community_members.borrow_mut();
        let member = members
            .iter_mut()
            .find(|m| m.community_id == *community_id && m.user_id == *user_id)
            .ok_or(RepoError::NotFound)?;
        member.role = role;
        Ok(())
    }

    fn try_get_community_member(
        &self,
        community_id: &Id,
        user_id: &Id,
    ) -> RepoResult<Option<CommunityMember>> {
        Ok(self
            .community_members
            .borrow()
            .iter()
            .find(|m| m.community_id == *community_id && m.user_id == *user_id)
            .cloned())
    }

    fn community_members(&self, community_id: &Id) -> RepoResult<Vec<CommunityMember>> {
        Ok(self
            .community_members
            .borrow()
            .iter()
            .filter(|m| m.community_id == *community_id)
            .cloned()
            .collect())
    }

    fn count_community_members(&self, community_id: &Id) -> RepoResult<usize> {
        Ok(self.community_members(community_id)?.len())
    }
}

impl ReportRepo for MockDb {
    fn create_report(&self, report: &Report) -> RepoResult<()> {
        let mut reports = self.reports.borrow_mut();
        if reports.iter().any(|r| r.id == report.id) {
            return Err(RepoError::AlreadyExists);
        }
        reports.push(report.clone());
        Ok(())
    }

    fn update_report(&self, report: &Report) -> RepoResult<()> {
        let mut reports = self.reports.borrow_mut();
        let existing = reports
            .iter_mut()
            .find(|r| r.id == report.id)
            .ok_or(RepoError::NotFound)?;
        *existing = report.clone();
        Ok(())
    }

    fn delete_report(&self, id: &Id) -> RepoResult<()> {
        let mut reports = self.reports.borrow_mut();
        let len_before = reports.len();
        reports.retain(|r| r.id != *id);
        if reports.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn get_report(&self, id: &Id) -> RepoResult<Report> {
        self.reports
            .borrow()
            .iter()
            .find(|r| r.id == *id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn reports_of_community(&self, community_id: &Id) -> RepoResult<Vec<Report>> {
        let mut reports: Vec<_> = self
            .reports
            .borrow()
            .iter()
            .filter(|r| r.community_id.as_ref() == Some(community_id))
            .cloned()
            .collect();
        reports.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(reports)
    }

    fn all_reports(&self) -> RepoResult<Vec<Report>> {
        let mut reports = self.reports.borrow().clone();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    fn count_reports(&self) -> RepoResult<usize> {
        Ok(self.reports.borrow().len())
    }
}
