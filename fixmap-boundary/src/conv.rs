//! Entity -> JSON conversions.

use fixmap_entities as e;

use super::*;

impl From<e::community::CommunityCategory> for CommunityCategory {
    fn from(from: e::community::CommunityCategory) -> Self {
        use e::community::CommunityCategory as E;
        match from {
            E::City => Self::City,
            E::Neighborhood => Self::Neighborhood,
            E::District => Self::District,
            E::Campus => Self::Campus,
            E::Region => Self::Region,
        }
    }
}

impl From<CommunityCategory> for e::community::CommunityCategory {
    fn from(from: CommunityCategory) -> Self {
        use CommunityCategory as J;
        match from {
            J::City => Self::City,
            J::Neighborhood => Self::Neighborhood,
            J::District => Self::District,
            J::Campus => Self::Campus,
            J::Region => Self::Region,
        }
    }
}

impl From<e::report::ReportStatus> for ReportStatus {
    fn from(from: e::report::ReportStatus) -> Self {
        use e::report::ReportStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::InProgress => Self::InProgress,
            E::Resolved => Self::Resolved,
        }
    }
}

impl From<ReportStatus> for e::report::ReportStatus {
    fn from(from: ReportStatus) -> Self {
        use ReportStatus as J;
        match from {
            J::Pending => Self::Pending,
            J::InProgress => Self::InProgress,
            J::Resolved => Self::Resolved,
        }
    }
}

impl From<e::report::ReportPriority> for ReportPriority {
    fn from(from: e::report::ReportPriority) -> Self {
        use e::report::ReportPriority as E;
        match from {
            E::Low => Self::Low,
            E::Medium => Self::Medium,
            E::High => Self::High,
            E::Urgent => Self::Urgent,
        }
    }
}

impl From<ReportPriority> for e::report::ReportPriority {
    fn from(from: ReportPriority) -> Self {
        use ReportPriority as J;
        match from {
            J::Low => Self::Low,
            J::Medium => Self::Medium,
            J::High => Self::High,
            J::Urgent => Self::Urgent,
        }
    }
}

impl From<e::member::MemberRole> for MemberRole {
    fn from(from: e::member::MemberRole) -> Self {
        use e::member::MemberRole as E;
        match from {
            E::Member => Self::Member,
            E::Admin => Self::Admin,
        }
    }
}

impl From<MemberRole> for e::member::MemberRole {
    fn from(from: MemberRole) -> Self {
        use MemberRole as J;
        match from {
            J::Member => Self::Member,
            J::Admin => Self::Admin,
        }
    }
}

impl From<e::community::Community> for Community {
    fn from(from: e::community::Community) -> Self {
        let e::community::Community {
            id,
            slug,
            name,
            description,
            category,
            center,
            address,
            radius_km,
            icon_url,
            banner_url,
            admin_id,
            member_count,
            report_count,
            is_verified,
            is_active,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            slug: slug.into(),
            name,
            description,
            category: category.into(),
            center_lat: center.lat_deg(),
            center_lng: center.lng_deg(),
            address,
            radius_km,
            icon_url: icon_url.map(Into::into),
            banner_url: banner_url.map(Into::into),
            admin_id: admin_id.into(),
            member_count,
            report_count,
            is_verified,
            is_active,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::report::Report> for Report {
    fn from(from: e::report::Report) -> Self {
        let e::report::Report {
            id,
            title,
            description,
            category,
            status,
            priority,
            pos,
            address,
            image_url,
            community_id,
            created_by,
            resolved_at,
            resolution_notes,
            upvote_count,
            view_count,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            category,
            status: status.into(),
            priority: priority.into(),
            lat: pos.lat_deg(),
            lng: pos.lng_deg(),
            address,
            image_url: image_url.map(Into::into),
            community_id: community_id.map(Into::into),
            created_by: created_by.into(),
            resolved_at: resolved_at.map(e::time::Timestamp::as_millis),
            resolution_notes,
            upvote_count,
            view_count,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            password: _,
            created_at,
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            created_at: created_at.as_millis(),
        }
    }
}
