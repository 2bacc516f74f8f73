use super::{
    authorize::community_access,
    prelude::*,
};
use crate::util::validate;

/// Allow-listed mutable community fields. The slug and the admin
/// are immutable through this path.
#[derive(Debug, Clone, Default)]
pub struct UpdateCommunity {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<CommunityCategory>,
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
    pub address: Option<String>,
    pub radius_km: Option<f64>,
    pub icon_url: Option<Url>,
    pub banner_url: Option<Url>,
    pub is_active: Option<bool>,
}

pub fn update_community<R>(
    repo: &R,
    slug: &str,
    update: UpdateCommunity,
    user_id: &Id,
) -> Result<Community>
where
    R: CommunityRepo + CommunityMemberRepo,
{
    let mut community = repo.get_community_by_slug(slug)?;
    if !community_access(repo, &community, Some(user_id))?.is_admin() {
        return Err(Error::Forbidden);
    }

    let UpdateCommunity {
        name,
        description,
        category,
        center_lat,
        center_lng,
        address,
        radius_km,
        icon_url,
        banner_url,
        is_active,
    } = update;

    if let Some(name) = name {
        if !validate::is_valid_display_name(&name) {
            return Err(Error::Name);
        }
        // Renaming does not change the slug.
        community.name = name;
    }
    if let Some(description) = description {
        community.description = Some(description);
    }
    if let Some(category) = category {
        community.category = category;
    }
    if center_lat.is_some() || center_lng.is_some() {
        let lat = center_lat.unwrap_or_else(|| community.center.lat_deg());
        let lng = center_lng.unwrap_or_else(|| community.center.lng_deg());
        community.center = MapPoint::try_from_lat_lng_deg(lat, lng)?;
    }
    if let Some(address) = address {
        community.address = Some(address);
    }
    if let Some(radius_km) = radius_km {
        if !validate::is_valid_radius_km(radius_km) {
            return Err(Error::Radius);
        }
        community.radius_km = Some(radius_km);
    }
    if let Some(icon_url) = icon_url {
        community.icon_url = Some(icon_url);
    }
    if let Some(banner_url) = banner_url {
        community.banner_url = Some(banner_url);
    }
    if let Some(is_active) = is_active {
        community.is_active = is_active;
    }

    community.updated_at = Timestamp::now();
    repo.update_community(&community)?;
    Ok(community)
}
