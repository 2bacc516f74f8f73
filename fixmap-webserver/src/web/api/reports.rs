use super::*;
use crate::core::entities::Id;

#[get("/communities/<slug>/reports")]
pub fn get_community_reports(db: sqlite::Connections, slug: String) -> Result<Vec<json::Report>> {
    let reports = {
        let db = db.shared()?;
        let community = db.get_community_by_slug(&slug)?;
        usecases::community_reports(&db, &community.id)?
    };
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

#[post("/communities/<slug>/reports", format = "application/json", data = "<new>")]
pub fn post_community_report(
    db: sqlite::Connections,
    account: Account,
    slug: String,
    new: JsonResult<json::NewReport>,
) -> result::Result<status::Created<Json<json::Report>>, ApiError> {
    let new = from_json::try_new_report(new?.into_inner())?;
    let report = flows::create_report(&db, Some(&slug), new, account.user_id().clone())?;
    let location = format!("/communities/{}/reports/{}", slug, report.id);
    Ok(status::Created::new(location).body(Json(report.into())))
}

#[get("/communities/<slug>/reports/<id>")]
pub fn get_community_report(
    db: sqlite::Connections,
    slug: String,
    id: String,
) -> Result<json::Report> {
    let report = {
        let db = db.shared()?;
        let community = db.get_community_by_slug(&slug)?;
        usecases::get_report(&db, Some(&community.id), &Id::from(id))?
    };
    Ok(Json(report.into()))
}

#[patch(
    "/communities/<slug>/reports/<id>",
    format = "application/json",
    data = "<update>"
)]
pub fn patch_community_report(
    db: sqlite::Connections,
    account: Account,
    slug: String,
    id: String,
    update: JsonResult<json::UpdateReport>,
) -> Result<json::Report> {
    let update = from_json::try_update_report(update?.into_inner())?;
    let report = flows::update_report(
        &db,
        Some(&slug),
        &Id::from(id),
        update,
        account.user_id(),
    )?;
    Ok(Json(report.into()))
}

#[delete("/communities/<slug>/reports/<id>")]
pub fn delete_community_report(
    db: sqlite::Connections,
    account: Account,
    slug: String,
    id: String,
) -> Result<()> {
    flows::delete_report(&db, Some(&slug), &Id::from(id), account.user_id())?;
    Ok(Json(()))
}

// Community-agnostic report API. Same authorization policy as the
// community-scoped routes.

#[get("/reports")]
pub fn get_reports(db: sqlite::Connections) -> Result<Vec<json::Report>> {
    let reports = {
        let db = db.shared()?;
        usecases::all_reports(&db)?
    };
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

#[post("/reports", format = "application/json", data = "<new>")]
pub fn post_report(
    db: sqlite::Connections,
    account: Account,
    new: JsonResult<json::NewReport>,
) -> result::Result<status::Created<Json<json::Report>>, ApiError> {
    let new = from_json::try_new_report(new?.into_inner())?;
    let report = flows::create_report(&db, None, new, account.user_id().clone())?;
    let location = format!("/reports/{}", report.id);
    Ok(status::Created::new(location).body(Json(report.into())))
}

#[patch("/reports/<id>", format = "application/json", data = "<update>")]
pub fn patch_report(
    db: sqlite::Connections,
    account: Account,
    id: String,
    update: JsonResult<json::UpdateReport>,
) -> Result<json::Report> {
    let update = from_json::try_update_report(update?.into_inner())?;
    let report = flows::update_report(&db, None, &Id::from(id), update, account.user_id())?;
    Ok(Json(report.into()))
}

#[delete("/reports/<id>")]
pub fn delete_report(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<()> {
    flows::delete_report(&db, None, &Id::from(id), account.user_id())?;
    Ok(Json(()))
}
