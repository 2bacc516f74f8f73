use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewReport {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub image_url: Option<Url>,
}

/// Creates a report, optionally scoped to a community.
///
/// The caller is responsible for resolving (and thereby checking the
/// existence of) the community beforehand.
pub fn create_report<R>(
    repo: &R,
    community_id: Option<&Id>,
    new: NewReport,
    created_by: Id,
) -> Result<Report>
where
    R: CommunityRepo + ReportRepo,
{
    let NewReport {
        title,
        description,
        category,
        latitude,
        longitude,
        address,
        image_url,
    } = new;
    if !validate::is_valid_display_name(&title) {
        return Err(Error::Title);
    }
    if !validate::is_valid_category(&category) {
        return Err(Error::Category);
    }
    let pos = MapPoint::try_from_lat_lng_deg(latitude, longitude)?;
    let now = Timestamp::now();
    let report = Report {
        id: Id::new(),
        title,
        description,
        category,
        status: ReportStatus::default(),
        priority: ReportPriority::default(),
        pos,
        address,
        image_url,
        community_id: community_id.cloned(),
        created_by,
        resolved_at: None,
        resolution_notes: None,
        upvote_count: 0,
        view_count: 0,
        created_at: now,
        updated_at: now,
    };
    repo.create_report(&report)?;
    if let Some(community_id) = community_id {
        let mut community = repo.get_community(community_id)?;
        community.report_count += 1;
        repo.update_community(&community)?;
    }
    log::debug!("Created report {} ({})", report.id, report.category);
    Ok(report)
}
