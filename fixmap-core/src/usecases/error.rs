use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("The title is invalid")]
    Title,
    #[error("The category is invalid")]
    Category,
    #[error("Invalid geographical position")]
    Position,
    #[error("Invalid radius")]
    Radius,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid e-mail address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid report status")]
    Status,
    #[error("Invalid report priority")]
    Priority,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The user already exists")]
    UserExists,
    #[error("The community is inactive")]
    CommunityInactive,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<fixmap_entities::geo::MapPointError> for Error {
    fn from(_: fixmap_entities::geo::MapPointError) -> Self {
        Self::Position
    }
}

impl From<fixmap_entities::email::EmailAddressParseError> for Error {
    fn from(_: fixmap_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<fixmap_entities::password::PasswordParseError> for Error {
    fn from(_: fixmap_entities::password::PasswordParseError) -> Self {
        Self::Password
    }
}

impl From<fixmap_entities::community::CommunityCategoryParseError> for Error {
    fn from(_: fixmap_entities::community::CommunityCategoryParseError) -> Self {
        Self::Category
    }
}

impl From<fixmap_entities::url::ParseError> for Error {
    fn from(_: fixmap_entities::url::ParseError) -> Self {
        Self::Url
    }
}
