use super::prelude::*;

/// Loads a report, optionally verifying that it belongs to the given
/// community. A report outside the requested scope is indistinguishable
/// from a missing one.
pub fn get_report<R>(repo: &R, scope: Option<&Id>, report_id: &Id) -> Result<Report>
where
    R: ReportRepo,
{
    let report = repo.get_report(report_id)?;
    if let Some(community_id) = scope {
        if report.community_id.as_ref() != Some(community_id) {
            return Err(Error::Repo(RepoError::NotFound));
        }
    }
    Ok(report)
}

/// Loads the community a report is scoped to, if any.
pub fn report_community<R>(repo: &R, report: &Report) -> Result<Option<Community>>
where
    R: CommunityRepo,
{
    report
        .community_id
        .as_ref()
        .map(|id| repo.get_community(id))
        .transpose()
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use fixmap_entities::builders::Builder;

    #[test]
    fn scope_mismatch_is_not_found() {
        let db = MockDb::default();
        let report = Report::build().community_id("a").finish();
        let report_id = report.id.clone();
        db.reports.borrow_mut().push(report);

        assert!(get_report(&db, Some(&"a".into()), &report_id).is_ok());
        assert!(matches!(
            get_report(&db, Some(&"b".into()), &report_id),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(get_report(&db, None, &report_id).is_ok());
    }
}
