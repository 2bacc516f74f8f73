use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use crate::core::entities::Id;
use fixmap_application::error::AppError;
use fixmap_core::usecases::Error as ParameterError;

pub const COOKIE_USER_KEY: &str = "fixmap-user-id";

type Result<T> = std::result::Result<T, AppError>;

/// Authentication state of a request, derived from the private
/// session cookie. Present on every request; the user may be absent.
#[derive(Debug)]
pub struct Auth {
    user_id: Option<Id>,
}

impl Auth {
    pub fn user_id(&self) -> Result<&Id> {
        self.user_id
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn opt_user_id(&self) -> Option<&Id> {
        self.user_id.as_ref()
    }

    fn user_id_from_cookie(request: &Request) -> Option<Id> {
        request
            .cookies()
            .get_private(COOKIE_USER_KEY)
            .map(|cookie| Id::from(cookie.value()))
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let mut user_id = None;
        if cfg!(feature = "cookies") {
            user_id = Self::user_id_from_cookie(request);
        }
        Outcome::Success(Self { user_id })
    }
}

/// An authenticated account. Requests without a valid session are
/// rejected with 401 before the handler runs.
#[derive(Debug)]
pub struct Account(Id);

impl Account {
    pub fn user_id(&self) -> &Id {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.user_id() {
            Ok(user_id) => Outcome::Success(Account(user_id.clone())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Version(pub &'static str);
