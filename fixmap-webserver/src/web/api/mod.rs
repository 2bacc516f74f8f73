use std::{fmt::Display, result};

use fixmap_boundary::Error as JsonErrorResponse;
use rocket::{
    self, delete, get,
    http::Status,
    patch, post,
    response::{self, status, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{guards::*, sqlite};
use crate::{
    adapters::json::{self, from_json},
    core::{prelude::*, usecases},
};
use fixmap_application::prelude as flows;

mod communities;
mod error;
mod reports;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   communities   --- //
        communities::get_communities,
        communities::post_community,
        communities::get_community,
        communities::patch_community,
        communities::post_join_community,
        // ---   reports   --- //
        reports::get_community_reports,
        reports::post_community_report,
        reports::get_community_report,
        reports::patch_community_report,
        reports::delete_community_report,
        reports::get_reports,
        reports::post_report,
        reports::patch_report,
        reports::delete_report,
        // ---   users   --- //
        users::post_user,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        // ---   misc   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let error = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        error,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
