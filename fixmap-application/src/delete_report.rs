use super::*;

pub fn delete_report(
    connections: &sqlite::Connections,
    community_slug: Option<&str>,
    report_id: &Id,
    user_id: &Id,
) -> Result<()> {
    use fixmap_core::repositories::CommunityRepo as _;
    connections
        .exclusive()?
        .transaction(|conn| {
            let scope = community_slug
                .map(|slug| conn.get_community_by_slug(slug))
                .transpose()?
                .map(|community| community.id);
            usecases::delete_report(conn, scope.as_ref(), report_id, user_id)
        })?;
    Ok(())
}
