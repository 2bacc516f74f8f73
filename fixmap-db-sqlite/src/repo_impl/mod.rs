// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use fixmap_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, util::load_url, *};

mod community;
mod member;
mod report;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_community_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::communities::dsl;
    dsl::communities
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn community_from_joined(from: models::JoinedCommunity) -> Result<Community> {
    let models::JoinedCommunity {
        rowid: _,
        id,
        slug,
        name,
        description,
        category,
        center_lat,
        center_lng,
        address,
        radius_km,
        icon_url,
        banner_url,
        member_count,
        report_count,
        is_verified,
        is_active,
        created_at,
        updated_at,
        admin_id,
    } = from;
    let category = CommunityCategory::parse(&category)
        .map_err(|_| repo::Error::Other(anyhow!("Invalid community category: {category}")))?;
    let center = MapPoint::try_from_lat_lng_deg(center_lat, center_lng)
        .map_err(|err| repo::Error::Other(anyhow!("Invalid community center: {err}")))?;
    Ok(Community {
        id: id.into(),
        slug: Slug::new_unchecked(slug),
        name,
        description,
        category,
        center,
        address,
        radius_km,
        icon_url: load_url(icon_url)?,
        banner_url: load_url(banner_url)?,
        admin_id: admin_id.into(),
        member_count: member_count as u64,
        report_count: report_count as u64,
        is_verified,
        is_active,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn member_from_joined(from: models::JoinedCommunityMember) -> Result<CommunityMember> {
    let models::JoinedCommunityMember {
        role,
        created_at,
        community_id,
        user_id,
    } = from;
    let role = MemberRole::try_from(role)
        .map_err(|err| repo::Error::Other(anyhow!("{err}")))?;
    Ok(CommunityMember {
        community_id: community_id.into(),
        user_id: user_id.into(),
        role,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn report_from_joined(from: models::JoinedReport) -> Result<Report> {
    let models::JoinedReport {
        rowid: _,
        id,
        title,
        description,
        category,
        status,
        priority,
        lat,
        lng,
        address,
        image_url,
        resolved_at,
        resolution_notes,
        upvote_count,
        view_count,
        created_at,
        updated_at,
        created_by,
        community_id,
    } = from;
    let status =
        ReportStatus::try_from(status).map_err(|err| repo::Error::Other(anyhow!("{err}")))?;
    let priority =
        ReportPriority::try_from(priority).map_err(|err| repo::Error::Other(anyhow!("{err}")))?;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .map_err(|err| repo::Error::Other(anyhow!("Invalid report position: {err}")))?;
    Ok(Report {
        id: id.into(),
        title,
        description,
        category,
        status,
        priority,
        pos,
        address,
        image_url: load_url(image_url)?,
        community_id: community_id.map(Into::into),
        created_by: created_by.into(),
        resolved_at: resolved_at.map(Timestamp::from_millis),
        resolution_notes,
        upvote_count: upvote_count as u64,
        view_count: view_count as u64,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}
