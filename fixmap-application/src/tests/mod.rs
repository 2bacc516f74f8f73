use super::{error::*, prelude::*, sqlite, usecases, *};

use fixmap_core::repositories::{CommunityMemberRepo as _, CommunityRepo as _, ReportRepo as _};
use fixmap_core::usecases::{Error as ParameterError, JoinOutcome};

fn setup() -> sqlite::Connections {
    let connections = sqlite::Connections::init(":memory:", 1).unwrap();
    fixmap_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    connections
}

fn register_user(connections: &sqlite::Connections, email: &str) -> Id {
    let db = connections.exclusive().unwrap();
    usecases::create_new_user(
        &db,
        usecases::NewUser {
            email: email.parse().unwrap(),
            password: "secret".into(),
        },
    )
    .unwrap()
    .id
}

fn new_community(name: &str) -> usecases::NewCommunity {
    usecases::NewCommunity {
        name: name.into(),
        description: None,
        category: CommunityCategory::City,
        center_lat: 40.0,
        center_lng: -74.0,
        address: None,
        radius_km: None,
    }
}

fn new_report(title: &str) -> usecases::NewReport {
    usecases::NewReport {
        title: title.into(),
        description: Some("description".into()),
        category: "pothole".into(),
        latitude: 40.1,
        longitude: -74.1,
        address: Some("5th Ave".into()),
        image_url: None,
    }
}

#[test]
fn create_community_and_load_it_back() {
    let connections = setup();
    let admin = register_user(&connections, "admin@example.com");

    let created = create_community(&connections, new_community("Test City"), admin.clone()).unwrap();
    assert_eq!("test-city", created.slug.as_str());

    let db = connections.shared().unwrap();
    let loaded = db.get_community_by_slug("test-city").unwrap();
    assert_eq!(created.id, loaded.id);
    assert_eq!(admin, loaded.admin_id);
    assert_eq!(CommunityCategory::City, loaded.category);
    assert_eq!(40.0, loaded.center.lat_deg());
    assert_eq!(-74.0, loaded.center.lng_deg());
    assert!(loaded.is_active);
    assert_eq!(0, loaded.member_count);
}

#[test]
fn list_communities_newest_first() {
    let connections = setup();
    let admin = register_user(&connections, "admin@example.com");
    create_community(&connections, new_community("First"), admin.clone()).unwrap();
    create_community(&connections, new_community("Second"), admin).unwrap();

    let db = connections.shared().unwrap();
    let all = db.all_communities().unwrap();
    assert_eq!(2, all.len());
    assert_eq!("second", all[0].slug.as_str());
    assert_eq!("first", all[1].slug.as_str());
}

#[test]
fn join_community_twice_is_idempotent() {
    let connections = setup();
    let admin = register_user(&connections, "admin@example.com");
    let user = register_user(&connections, "user@example.com");
    let community = create_community(&connections, new_community("Test City"), admin).unwrap();

    let outcome = join_community(&connections, "test-city", &user).unwrap();
    assert_eq!(JoinOutcome::Joined(MemberRole::Member), outcome);

    let outcome = join_community(&connections, "test-city", &user).unwrap();
    assert_eq!(JoinOutcome::AlreadyMember(MemberRole::Member), outcome);

    let db = connections.shared().unwrap();
    assert_eq!(1, db.count_community_members(&community.id).unwrap());
    assert_eq!(1, db.get_community(&community.id).unwrap().member_count);
}

#[test]
fn report_lifecycle_with_resolved_latch() {
    let connections = setup();
    let admin = register_user(&connections, "admin@example.com");
    let reporter = register_user(&connections, "reporter@example.com");
    let community = create_community(&connections, new_community("Test City"), admin).unwrap();

    let report = create_report(
        &connections,
        Some("test-city"),
        new_report("Pothole on 5th"),
        reporter.clone(),
    )
    .unwrap();
    assert_eq!(ReportStatus::Pending, report.status);
    assert_eq!(Some(community.id.clone()), report.community_id);
    {
        let db = connections.shared().unwrap();
        assert_eq!(1, db.get_community(&community.id).unwrap().report_count);
    }

    // Resolve it: the latch must be set exactly once.
    let update = usecases::UpdateReport {
        status: Some(ReportStatus::Resolved),
        resolution_notes: Some("Filled in".into()),
        ..Default::default()
    };
    let resolved = update_report(
        &connections,
        Some("test-city"),
        &report.id,
        update,
        &reporter,
    )
    .unwrap();
    let resolved_at = resolved.resolved_at.expect("resolved_at set");

    let update = usecases::UpdateReport {
        priority: Some(ReportPriority::High),
        ..Default::default()
    };
    let updated = update_report(
        &connections,
        Some("test-city"),
        &report.id,
        update,
        &reporter,
    )
    .unwrap();
    assert_eq!(Some(resolved_at), updated.resolved_at);
    assert_eq!(ReportPriority::High, updated.priority);

    delete_report(&connections, Some("test-city"), &report.id, &reporter).unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(0, db.count_reports().unwrap());
    assert_eq!(0, db.get_community(&community.id).unwrap().report_count);
}

#[test]
fn non_admin_must_not_update_community() {
    let connections = setup();
    let admin = register_user(&connections, "admin@example.com");
    let user = register_user(&connections, "user@example.com");
    create_community(&connections, new_community("Test City"), admin).unwrap();
    join_community(&connections, "test-city", &user).unwrap();

    let update = usecases::UpdateCommunity {
        radius_km: Some(10.0),
        ..Default::default()
    };
    let err = update_community(&connections, "test-city", update, &user).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(ParameterError::Forbidden))
    ));
}

#[test]
fn create_report_in_unknown_community_fails() {
    let connections = setup();
    let reporter = register_user(&connections, "reporter@example.com");
    let err = create_report(
        &connections,
        Some("nowhere"),
        new_report("Pothole"),
        reporter,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(ParameterError::Repo(
            repositories::Error::NotFound
        )))
    ));
}

#[test]
fn scoped_report_listing_is_chronological() {
    let connections = setup();
    let admin = register_user(&connections, "admin@example.com");
    let community = create_community(&connections, new_community("Test City"), admin.clone()).unwrap();
    create_report(
        &connections,
        Some("test-city"),
        new_report("First"),
        admin.clone(),
    )
    .unwrap();
    create_report(&connections, Some("test-city"), new_report("Second"), admin).unwrap();

    let db = connections.shared().unwrap();
    let reports = db.reports_of_community(&community.id).unwrap();
    assert_eq!(2, reports.len());
    assert_eq!("First", reports[0].title);
    assert_eq!("Second", reports[1].title);

    let all = db.all_reports().unwrap();
    assert_eq!("Second", all[0].title);
    assert_eq!("First", all[1].title);
}
