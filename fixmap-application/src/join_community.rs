use super::*;
use fixmap_core::usecases::JoinOutcome;

pub fn join_community(
    connections: &sqlite::Connections,
    slug: &str,
    user_id: &Id,
) -> Result<JoinOutcome> {
    let outcome = connections
        .exclusive()?
        .transaction(|conn| usecases::join_community(conn, slug, user_id))?;
    Ok(outcome)
}
