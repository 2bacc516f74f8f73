use super::prelude::*;

/// Reports of a single community, oldest first.
pub fn community_reports<R: ReportRepo>(repo: &R, community_id: &Id) -> Result<Vec<Report>> {
    Ok(repo.reports_of_community(community_id)?)
}

/// All reports across communities, newest first.
pub fn all_reports<R: ReportRepo>(repo: &R) -> Result<Vec<Report>> {
    Ok(repo.all_reports()?)
}
