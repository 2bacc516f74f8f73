use super::{
    authorize::report_access,
    get_report::{get_report, report_community},
    prelude::*,
};

/// Hard-deletes a report; same authorization rule as updating.
pub fn delete_report<R>(
    repo: &R,
    scope: Option<&Id>,
    report_id: &Id,
    user_id: &Id,
) -> Result<()>
where
    R: ReportRepo + CommunityRepo + CommunityMemberRepo,
{
    let report = get_report(repo, scope, report_id)?;
    let community = report_community(repo, &report)?;
    if !report_access(repo, community.as_ref(), &report, user_id)?.can_moderate() {
        return Err(Error::Forbidden);
    }
    repo.delete_report(&report.id)?;
    if let Some(mut community) = community {
        community.report_count = community.report_count.saturating_sub(1);
        repo.update_community(&community)?;
    }
    log::debug!("Deleted report {}", report.id);
    Ok(())
}
