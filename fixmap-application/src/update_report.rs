use super::*;

pub fn update_report(
    connections: &sqlite::Connections,
    community_slug: Option<&str>,
    report_id: &Id,
    update: usecases::UpdateReport,
    user_id: &Id,
) -> Result<Report> {
    use fixmap_core::repositories::CommunityRepo as _;
    let report = connections
        .exclusive()?
        .transaction(|conn| {
            let scope = community_slug
                .map(|slug| conn.get_community_by_slug(slug))
                .transpose()?
                .map(|community| community.id);
            usecases::update_report(conn, scope.as_ref(), report_id, update, user_id).map_err(
                |err| {
                    log::warn!("Failed to update report {report_id}: {err}");
                    err
                },
            )
        })?;
    Ok(report)
}
