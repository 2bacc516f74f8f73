use super::*;

pub fn create_community(
    connections: &sqlite::Connections,
    new: usecases::NewCommunity,
    admin_id: Id,
) -> Result<Community> {
    let community = connections
        .exclusive()?
        .transaction(|conn| usecases::create_community(conn, new, admin_id))?;
    log::info!("Created community {} ({})", community.slug, community.id);
    Ok(community)
}
