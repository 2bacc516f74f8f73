///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        email -> Text,
        password -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Communities
///////////////////////////////////////////////////////////////////////

table! {
    communities (rowid) {
        rowid -> BigInt,
        id -> Text,
        slug -> Text,
        name -> Text,
        description -> Nullable<Text>,
        category -> Text,
        center_lat -> Double,
        center_lng -> Double,
        address -> Nullable<Text>,
        radius_km -> Nullable<Double>,
        icon_url -> Nullable<Text>,
        banner_url -> Nullable<Text>,
        admin_rowid -> BigInt,
        member_count -> BigInt,
        report_count -> BigInt,
        is_verified -> Bool,
        is_active -> Bool,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(communities -> users (admin_rowid));

table! {
    community_members (rowid) {
        rowid -> BigInt,
        community_rowid -> BigInt,
        user_rowid -> BigInt,
        role -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(community_members -> communities (community_rowid));
joinable!(community_members -> users (user_rowid));

///////////////////////////////////////////////////////////////////////
// Reports
///////////////////////////////////////////////////////////////////////

table! {
    reports (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        description -> Nullable<Text>,
        category -> Text,
        status -> SmallInt,
        priority -> SmallInt,
        lat -> Double,
        lng -> Double,
        address -> Nullable<Text>,
        image_url -> Nullable<Text>,
        community_rowid -> Nullable<BigInt>,
        created_by -> BigInt,
        resolved_at -> Nullable<BigInt>,
        resolution_notes -> Nullable<Text>,
        upvote_count -> BigInt,
        view_count -> BigInt,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(reports -> communities (community_rowid));
joinable!(reports -> users (created_by));

allow_tables_to_appear_in_same_query!(users, communities, community_members, reports);
