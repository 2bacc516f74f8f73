pub use fixmap_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl TryFrom<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    type Result<T> = std::result::Result<T, usecases::Error>;

    pub fn try_new_community(c: NewCommunity) -> Result<usecases::NewCommunity> {
        let NewCommunity {
            name,
            description,
            category,
            center_lat,
            center_lng,
            address,
            radius_km,
        } = c;
        let name = name.ok_or(usecases::Error::Name)?;
        let category = e::CommunityCategory::parse(&category.ok_or(usecases::Error::Category)?)?;
        let center_lat = center_lat.ok_or(usecases::Error::Position)?;
        let center_lng = center_lng.ok_or(usecases::Error::Position)?;
        Ok(usecases::NewCommunity {
            name,
            description,
            category,
            center_lat,
            center_lng,
            address,
            radius_km,
        })
    }

    pub fn try_update_community(c: UpdateCommunity) -> Result<usecases::UpdateCommunity> {
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
        } = c;
        let category = category
            .map(|category| e::CommunityCategory::parse(&category))
            .transpose()?;
        let icon_url = icon_url.map(|url| url.parse::<e::Url>()).transpose()?;
        let banner_url = banner_url.map(|url| url.parse::<e::Url>()).transpose()?;
        Ok(usecases::UpdateCommunity {
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
        })
    }

    pub fn try_new_report(r: NewReport) -> Result<usecases::NewReport> {
        let NewReport {
            title,
            description,
            category,
            latitude,
            longitude,
            address,
            image_url,
        } = r;
        let title = title.ok_or(usecases::Error::Title)?;
        let category = category.ok_or(usecases::Error::Category)?;
        let latitude = latitude.ok_or(usecases::Error::Position)?;
        let longitude = longitude.ok_or(usecases::Error::Position)?;
        let image_url = image_url.map(|url| url.parse::<e::Url>()).transpose()?;
        Ok(usecases::NewReport {
            title,
            description,
            category,
            latitude,
            longitude,
            address,
            image_url,
        })
    }

    pub fn try_update_report(r: UpdateReport) -> Result<usecases::UpdateReport> {
        let UpdateReport {
            title,
            description,
            category,
            status,
            priority,
            lat,
            lng,
            address,
            image_url,
            resolution_notes,
        } = r;
        let status = status
            .map(|status| {
                status
                    .parse::<e::ReportStatus>()
                    .map_err(|_| usecases::Error::Status)
            })
            .transpose()?;
        let priority = priority
            .map(|priority| {
                priority
                    .parse::<e::ReportPriority>()
                    .map_err(|_| usecases::Error::Priority)
            })
            .transpose()?;
        let image_url = image_url.map(|url| url.parse::<e::Url>()).transpose()?;
        Ok(usecases::UpdateReport {
            title,
            description,
            category,
            status,
            priority,
            lat,
            lng,
            address,
            image_url,
            resolution_notes,
        })
    }

    pub fn try_new_user(u: NewUser) -> Result<usecases::NewUser> {
        let NewUser { email, password } = u;
        let email = email.parse::<e::EmailAddress>()?;
        Ok(usecases::NewUser { email, password })
    }
}
