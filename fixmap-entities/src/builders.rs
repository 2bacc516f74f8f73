pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{community_builder::*, report_builder::*};

pub mod community_builder {

    use super::*;
    use crate::{community::*, geo::*, id::*, slug::Slug, time::*};

    #[derive(Debug)]
    pub struct CommunityBuild {
        community: Community,
    }

    impl CommunityBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.community.id = id.into();
            self
        }
        pub fn slug(mut self, slug: &str) -> Self {
            self.community.slug = slug.parse().unwrap();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.community.name = name.into();
            self
        }
        pub fn category(mut self, category: CommunityCategory) -> Self {
            self.community.category = category;
            self
        }
        pub fn center(mut self, center: MapPoint) -> Self {
            self.community.center = center;
            self
        }
        pub fn radius_km(mut self, radius_km: f64) -> Self {
            self.community.radius_km = Some(radius_km);
            self
        }
        pub fn admin_id(mut self, admin_id: &str) -> Self {
            self.community.admin_id = admin_id.into();
            self
        }
        pub fn inactive(mut self) -> Self {
            self.community.is_active = false;
            self
        }
        pub fn finish(self) -> Community {
            self.community
        }
    }

    impl Builder for Community {
        type Build = CommunityBuild;
        fn build() -> CommunityBuild {
            let now = Timestamp::now();
            CommunityBuild {
                community: Community {
                    id: Id::new(),
                    slug: Slug::new_unchecked("test-community".into()),
                    name: "Test Community".into(),
                    description: None,
                    category: CommunityCategory::City,
                    center: MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
                    address: None,
                    radius_km: None,
                    icon_url: None,
                    banner_url: None,
                    admin_id: Id::new(),
                    member_count: 0,
                    report_count: 0,
                    is_verified: false,
                    is_active: true,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod report_builder {

    use super::*;
    use crate::{geo::*, id::*, report::*, time::*};

    #[derive(Debug)]
    pub struct ReportBuild {
        report: Report,
    }

    impl ReportBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.report.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.report.title = title.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.report.category = category.into();
            self
        }
        pub fn status(mut self, status: ReportStatus) -> Self {
            self.report.status = status;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.report.pos = pos;
            self
        }
        pub fn community_id(mut self, community_id: &str) -> Self {
            self.report.community_id = Some(community_id.into());
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.report.created_by = user_id.into();
            self
        }
        pub fn finish(self) -> Report {
            self.report
        }
    }

    impl Builder for Report {
        type Build = ReportBuild;
        fn build() -> ReportBuild {
            let now = Timestamp::now();
            ReportBuild {
                report: Report {
                    id: Id::new(),
                    title: "Test Report".into(),
                    description: None,
                    category: "pothole".into(),
                    status: ReportStatus::default(),
                    priority: ReportPriority::default(),
                    pos: MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
                    address: None,
                    image_url: None,
                    community_id: None,
                    created_by: Id::new(),
                    resolved_at: None,
                    resolution_notes: None,
                    upvote_count: 0,
                    view_count: 0,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
