use super::{
    authorize::report_access,
    get_report::{get_report, report_community},
    prelude::*,
};
use crate::util::validate;

/// Allow-listed mutable report fields. Ownership, community scope and
/// the counters are immutable through this path.
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<ReportStatus>,
    pub priority: Option<ReportPriority>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    pub image_url: Option<Url>,
    pub resolution_notes: Option<String>,
}

pub fn update_report<R>(
    repo: &R,
    scope: Option<&Id>,
    report_id: &Id,
    update: UpdateReport,
    user_id: &Id,
) -> Result<Report>
where
    R: ReportRepo + CommunityRepo + CommunityMemberRepo,
{
    let mut report = get_report(repo, scope, report_id)?;
    let community = report_community(repo, &report)?;
    if !report_access(repo, community.as_ref(), &report, user_id)?.can_moderate() {
        return Err(Error::Forbidden);
    }

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
    } = update;

    if let Some(title) = title {
        if !validate::is_valid_display_name(&title) {
            return Err(Error::Title);
        }
        report.title = title;
    }
    if let Some(description) = description {
        report.description = Some(description);
    }
    if let Some(category) = category {
        if !validate::is_valid_category(&category) {
            return Err(Error::Category);
        }
        report.category = category;
    }
    if let Some(priority) = priority {
        report.priority = priority;
    }
    if lat.is_some() || lng.is_some() {
        let lat = lat.unwrap_or_else(|| report.pos.lat_deg());
        let lng = lng.unwrap_or_else(|| report.pos.lng_deg());
        report.pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
    }
    if let Some(address) = address {
        report.address = Some(address);
    }
    if let Some(image_url) = image_url {
        report.image_url = Some(image_url);
    }
    if let Some(resolution_notes) = resolution_notes {
        report.resolution_notes = Some(resolution_notes);
    }

    let now = Timestamp::now();
    if let Some(status) = status {
        // Latches resolved_at on the first transition to resolved.
        report.set_status(status, now);
    }
    report.updated_at = now;
    repo.update_report(&report)?;
    Ok(report)
}
