// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub email: String,
    pub password: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = communities)]
pub struct NewCommunity<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub category: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub address: Option<&'a str>,
    pub radius_km: Option<f64>,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub admin_rowid: i64,
    pub member_count: i64,
    pub report_count: i64,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

// Everything mutable about a community. The id, slug, admin and
// creation time are never rewritten.
#[derive(AsChangeset)]
#[diesel(table_name = communities, treat_none_as_null = true)]
pub struct CommunityChangeset<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub category: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub address: Option<&'a str>,
    pub radius_km: Option<f64>,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub member_count: i64,
    pub report_count: i64,
    pub is_verified: bool,
    pub is_active: bool,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct JoinedCommunity {
    pub rowid: i64,
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub address: Option<String>,
    pub radius_km: Option<f64>,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub member_count: i64,
    pub report_count: i64,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    // Joined columns
    pub admin_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = community_members)]
pub struct NewCommunityMember {
    pub community_rowid: i64,
    pub user_rowid: i64,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct JoinedCommunityMember {
    pub role: i16,
    pub created_at: i64,
    // Joined columns
    pub community_id: String,
    pub user_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = reports)]
pub struct NewReport<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub category: &'a str,
    pub status: i16,
    pub priority: i16,
    pub lat: f64,
    pub lng: f64,
    pub address: Option<&'a str>,
    pub image_url: Option<String>,
    pub community_rowid: Option<i64>,
    pub created_by: i64,
    pub resolved_at: Option<i64>,
    pub resolution_notes: Option<&'a str>,
    pub upvote_count: i64,
    pub view_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

// Everything mutable about a report. The id, community scope, owner
// and creation time are never rewritten.
#[derive(AsChangeset)]
#[diesel(table_name = reports, treat_none_as_null = true)]
pub struct ReportChangeset<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub category: &'a str,
    pub status: i16,
    pub priority: i16,
    pub lat: f64,
    pub lng: f64,
    pub address: Option<&'a str>,
    pub image_url: Option<String>,
    pub resolved_at: Option<i64>,
    pub resolution_notes: Option<&'a str>,
    pub upvote_count: i64,
    pub view_count: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct JoinedReport {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub status: i16,
    pub priority: i16,
    pub lat: f64,
    pub lng: f64,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub resolved_at: Option<i64>,
    pub resolution_notes: Option<String>,
    pub upvote_count: i64,
    pub view_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
    // Joined columns
    pub created_by: String,
    pub community_id: Option<String>,
}
