use super::prelude::*;
use crate::util::{slug::slugify, validate};

#[derive(Debug, Clone)]
pub struct NewCommunity {
    pub name: String,
    pub description: Option<String>,
    pub category: CommunityCategory,
    pub center_lat: f64,
    pub center_lng: f64,
    pub address: Option<String>,
    pub radius_km: Option<f64>,
}

pub fn create_community<R>(repo: &R, new: NewCommunity, admin_id: Id) -> Result<Community>
where
    R: CommunityRepo,
{
    let NewCommunity {
        name,
        description,
        category,
        center_lat,
        center_lng,
        address,
        radius_km,
    } = new;
    if !validate::is_valid_display_name(&name) {
        return Err(Error::Name);
    }
    let center = MapPoint::try_from_lat_lng_deg(center_lat, center_lng)?;
    if let Some(radius_km) = radius_km {
        if !validate::is_valid_radius_km(radius_km) {
            return Err(Error::Radius);
        }
    }
    let id = Id::new();
    let slug = unique_slug(repo, &name, &id)?;
    let now = Timestamp::now();
    let community = Community {
        id,
        slug,
        name,
        description,
        category,
        center,
        address,
        radius_km,
        icon_url: None,
        banner_url: None,
        admin_id,
        member_count: 0,
        report_count: 0,
        is_verified: false,
        is_active: true,
        created_at: now,
        updated_at: now,
    };
    log::debug!("Creating new community: slug = {}", community.slug);
    repo.create_community(&community)?;
    Ok(community)
}

// The slug is derived from the name and never changes afterwards.
// A taken slug is disambiguated with the id prefix of the new community.
fn unique_slug<R: CommunityRepo>(repo: &R, name: &str, id: &Id) -> Result<Slug> {
    let base = slugify(name);
    let base = if base.is_empty() {
        format!("community-{}", &id.as_str()[..8])
    } else {
        base
    };
    let slug = if repo.try_get_community_by_slug(&base)?.is_none() {
        base
    } else {
        format!("{}-{}", base, &id.as_str()[..8])
    };
    slug.parse().map_err(|_| Error::Name)
}
