use super::*;

pub fn update_community(
    connections: &sqlite::Connections,
    slug: &str,
    update: usecases::UpdateCommunity,
    user_id: &Id,
) -> Result<Community> {
    let community = connections
        .exclusive()?
        .transaction(|conn| {
            usecases::update_community(conn, slug, update, user_id).map_err(|err| {
                log::warn!("Failed to update community {slug}: {err}");
                err
            })
        })?;
    Ok(community)
}
