use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::{geo::MapPoint, id::Id, time::Timestamp, url::Url};

pub type ReportStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReportStatus {
    Pending    = 0,
    InProgress = 1,
    Resolved   = 2,
}

impl ReportStatus {
    pub const fn default() -> Self {
        Self::Pending
    }

    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

#[derive(Debug, Error)]
#[error("Invalid report status primitive: {0}")]
pub struct InvalidReportStatusPrimitive(ReportStatusPrimitive);

impl TryFrom<ReportStatusPrimitive> for ReportStatus {
    type Error = InvalidReportStatusPrimitive;
    fn try_from(from: ReportStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidReportStatusPrimitive(from))
    }
}

impl From<ReportStatus> for ReportStatusPrimitive {
    fn from(from: ReportStatus) -> Self {
        from.to_i16().expect("report status primitive")
    }
}

pub type ReportPriorityPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportPriority {
    Low    = 0,
    Medium = 1,
    High   = 2,
    Urgent = 3,
}

impl ReportPriority {
    pub const fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Error)]
#[error("Invalid report priority primitive: {0}")]
pub struct InvalidReportPriorityPrimitive(ReportPriorityPrimitive);

impl TryFrom<ReportPriorityPrimitive> for ReportPriority {
    type Error = InvalidReportPriorityPrimitive;
    fn try_from(from: ReportPriorityPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidReportPriorityPrimitive(from))
    }
}

impl From<ReportPriority> for ReportPriorityPrimitive {
    fn from(from: ReportPriority) -> Self {
        from.to_i16().expect("report priority primitive")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id               : Id,
    pub title            : String,
    pub description      : Option<String>,
    pub category         : String,
    pub status           : ReportStatus,
    pub priority         : ReportPriority,
    pub pos              : MapPoint,
    pub address          : Option<String>,
    pub image_url        : Option<Url>,
    pub community_id     : Option<Id>,
    pub created_by       : Id,
    pub resolved_at      : Option<Timestamp>,
    pub resolution_notes : Option<String>,
    pub upvote_count     : u64,
    pub view_count       : u64,
    pub created_at       : Timestamp,
    pub updated_at       : Timestamp,
}

impl Report {
    /// Changes the status and latches `resolved_at` on the first
    /// transition to [`ReportStatus::Resolved`]. Once set, `resolved_at`
    /// is never modified again.
    pub fn set_status(&mut self, status: ReportStatus, at: Timestamp) {
        if status.is_resolved() && self.resolved_at.is_none() {
            self.resolved_at = Some(at);
        }
        self.status = status;
    }
}
