use super::*;

/// Creates a report, scoped to the community behind `community_slug`
/// if one is given. Resolving the slug inside the transaction keeps
/// the existence check and the counter update atomic.
pub fn create_report(
    connections: &sqlite::Connections,
    community_slug: Option<&str>,
    new: usecases::NewReport,
    created_by: Id,
) -> Result<Report> {
    use fixmap_core::repositories::CommunityRepo as _;
    let report = connections
        .exclusive()?
        .transaction(|conn| {
            let community_id = community_slug
                .map(|slug| conn.get_community_by_slug(slug))
                .transpose()?
                .map(|community| community.id);
            usecases::create_report(conn, community_id.as_ref(), new, created_by)
        })?;
    Ok(report)
}
