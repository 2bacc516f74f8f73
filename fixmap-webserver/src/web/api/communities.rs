use super::*;
use crate::core::usecases::JoinOutcome;

#[get("/communities")]
pub fn get_communities(db: sqlite::Connections) -> Result<Vec<json::Community>> {
    let communities = {
        let db = db.shared()?;
        usecases::all_communities(&db)?
    };
    Ok(Json(communities.into_iter().map(Into::into).collect()))
}

#[post("/communities", format = "application/json", data = "<new>")]
pub fn post_community(
    db: sqlite::Connections,
    account: Account,
    new: JsonResult<json::NewCommunity>,
) -> Result<json::Community> {
    let new = from_json::try_new_community(new?.into_inner())?;
    let community = flows::create_community(&db, new, account.user_id().clone())?;
    Ok(Json(community.into()))
}

#[get("/communities/<slug>")]
pub fn get_community(
    db: sqlite::Connections,
    auth: Auth,
    slug: String,
) -> Result<json::CommunityWithMembership> {
    let (community, access) = {
        let db = db.shared()?;
        usecases::get_community(&db, &slug, auth.opt_user_id())?
    };
    Ok(Json(json::CommunityWithMembership {
        community: community.into(),
        is_member: access.is_member(),
        is_admin: access.is_admin(),
    }))
}

#[patch("/communities/<slug>", format = "application/json", data = "<update>")]
pub fn patch_community(
    db: sqlite::Connections,
    account: Account,
    slug: String,
    update: JsonResult<json::UpdateCommunity>,
) -> Result<json::Community> {
    let update = from_json::try_update_community(update?.into_inner())?;
    let community = flows::update_community(&db, &slug, update, account.user_id())?;
    Ok(Json(community.into()))
}

#[post("/communities/<slug>/join")]
pub fn post_join_community(
    db: sqlite::Connections,
    account: Account,
    slug: String,
) -> result::Result<status::Custom<Json<json::JoinResponse>>, ApiError> {
    let outcome = flows::join_community(&db, &slug, account.user_id())?;
    let http_status = match outcome {
        JoinOutcome::Joined(_) => Status::Created,
        JoinOutcome::AlreadyMember(_) => Status::Ok,
    };
    Ok(status::Custom(
        http_status,
        Json(json::JoinResponse {
            joined: true,
            role: outcome.role().into(),
        }),
    ))
}
