use rocket::http::CookieJar;

use super::*;

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::User> {
    let new_user = from_json::try_new_user(new_user?.into_inner())?;
    let user = {
        let db = db.exclusive()?;
        usecases::create_new_user(&db, new_user)?
    };
    Ok(Json(user.into()))
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
) -> Result<json::User> {
    let login = login?.into_inner();
    let user = {
        let credentials = usecases::Credentials {
            email: &login.email.parse()?,
            password: &login.password,
        };
        usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
            debug!("Login with email '{}' failed: {}", login.email, err);
            err
        })?
    };
    if cfg!(feature = "cookies") {
        cookies.add_private((COOKIE_USER_KEY, user.id.to_string()));
    }
    Ok(Json(user.into()))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<()> {
    cookies.remove_private(COOKIE_USER_KEY);
    Json(())
}

#[get("/users/current", format = "application/json")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, account.user_id())?;
    Ok(Json(user.into()))
}
