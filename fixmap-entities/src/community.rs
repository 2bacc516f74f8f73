use std::str::FromStr;

use strum::{Display, EnumString};
use thiserror::Error;

use crate::{geo::MapPoint, id::Id, slug::Slug, time::Timestamp, url::Url};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Community {
    pub id           : Id,
    pub slug         : Slug,
    pub name         : String,
    pub description  : Option<String>,
    pub category     : CommunityCategory,
    pub center       : MapPoint,
    pub address      : Option<String>,
    pub radius_km    : Option<f64>,
    pub icon_url     : Option<Url>,
    pub banner_url   : Option<Url>,
    pub admin_id     : Id,
    pub member_count : u64,
    pub report_count : u64,
    pub is_verified  : bool,
    pub is_active    : bool,
    pub created_at   : Timestamp,
    pub updated_at   : Timestamp,
}

impl Community {
    /// Whether a point lies within the community's radius around its center.
    ///
    /// Communities without a radius cover everything.
    pub fn covers(&self, pos: MapPoint) -> bool {
        match self.radius_km {
            Some(radius_km) => self.center.distance_km(pos) <= radius_km,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommunityCategory {
    City,
    Neighborhood,
    District,
    Campus,
    Region,
}

#[derive(Debug, Error)]
#[error("Invalid community category")]
pub struct CommunityCategoryParseError;

impl CommunityCategory {
    pub fn parse(s: &str) -> Result<Self, CommunityCategoryParseError> {
        Self::from_str(s).map_err(|_| CommunityCategoryParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_category() {
        assert_eq!(CommunityCategory::City, CommunityCategory::parse("city").unwrap());
        assert_eq!(
            CommunityCategory::Neighborhood,
            CommunityCategory::parse("Neighborhood").unwrap()
        );
        assert!(CommunityCategory::parse("galaxy").is_err());
        assert_eq!("campus", CommunityCategory::Campus.to_string());
    }
}
