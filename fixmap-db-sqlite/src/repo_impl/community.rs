use super::*;

impl<'a> CommunityRepo for DbReadOnly<'a> {
    fn create_community(&self, _community: &Community) -> Result<()> {
        unreachable!();
    }
    fn update_community(&self, _community: &Community) -> Result<()> {
        unreachable!();
    }

    fn get_community(&self, id: &Id) -> Result<Community> {
        get_community(&mut self.conn.borrow_mut(), id)
    }
    fn get_community_by_slug(&self, slug: &str) -> Result<Community> {
        get_community_by_slug(&mut self.conn.borrow_mut(), slug)
    }
    fn try_get_community_by_slug(&self, slug: &str) -> Result<Option<Community>> {
        try_get_community_by_slug(&mut self.conn.borrow_mut(), slug)
    }

    fn all_communities(&self) -> Result<Vec<Community>> {
        all_communities(&mut self.conn.borrow_mut())
    }
    fn count_communities(&self) -> Result<usize> {
        count_communities(&mut self.conn.borrow_mut())
    }
}

impl<'a> CommunityRepo for DbReadWrite<'a> {
    fn create_community(&self, community: &Community) -> Result<()> {
        create_community(&mut self.conn.borrow_mut(), community)
    }
    fn update_community(&self, community: &Community) -> Result<()> {
        update_community(&mut self.conn.borrow_mut(), community)
    }

    fn get_community(&self, id: &Id) -> Result<Community> {
        get_community(&mut self.conn.borrow_mut(), id)
    }
    fn get_community_by_slug(&self, slug: &str) -> Result<Community> {
        get_community_by_slug(&mut self.conn.borrow_mut(), slug)
    }
    fn try_get_community_by_slug(&self, slug: &str) -> Result<Option<Community>> {
        try_get_community_by_slug(&mut self.conn.borrow_mut(), slug)
    }

    fn all_communities(&self) -> Result<Vec<Community>> {
        all_communities(&mut self.conn.borrow_mut())
    }
    fn count_communities(&self) -> Result<usize> {
        count_communities(&mut self.conn.borrow_mut())
    }
}

impl<'a> CommunityRepo for DbConnection<'a> {
    fn create_community(&self, community: &Community) -> Result<()> {
        create_community(&mut self.conn.borrow_mut(), community)
    }
    fn update_community(&self, community: &Community) -> Result<()> {
        update_community(&mut self.conn.borrow_mut(), community)
    }

    fn get_community(&self, id: &Id) -> Result<Community> {
        get_community(&mut self.conn.borrow_mut(), id)
    }
    fn get_community_by_slug(&self, slug: &str) -> Result<Community> {
        get_community_by_slug(&mut self.conn.borrow_mut(), slug)
    }
    fn try_get_community_by_slug(&self, slug: &str) -> Result<Option<Community>> {
        try_get_community_by_slug(&mut self.conn.borrow_mut(), slug)
    }

    fn all_communities(&self) -> Result<Vec<Community>> {
        all_communities(&mut self.conn.borrow_mut())
    }
    fn count_communities(&self) -> Result<usize> {
        count_communities(&mut self.conn.borrow_mut())
    }
}

// The admin is stored as a rowid reference and joined back into
// its public id when loading.
macro_rules! joined_community_columns {
    () => {
        (
            schema::communities::rowid,
            schema::communities::id,
            schema::communities::slug,
            schema::communities::name,
            schema::communities::description,
            schema::communities::category,
            schema::communities::center_lat,
            schema::communities::center_lng,
            schema::communities::address,
            schema::communities::radius_km,
            schema::communities::icon_url,
            schema::communities::banner_url,
            schema::communities::member_count,
            schema::communities::report_count,
            schema::communities::is_verified,
            schema::communities::is_active,
            schema::communities::created_at,
            schema::communities::updated_at,
            schema::users::id,
        )
    };
}

fn create_community(conn: &mut SqliteConnection, c: &Community) -> Result<()> {
    let admin_rowid = resolve_user_rowid(conn, &c.admin_id)?;
    let new_community = models::NewCommunity {
        id: c.id.as_str(),
        slug: c.slug.as_str(),
        name: &c.name,
        description: c.description.as_deref(),
        category: c.category.to_string(),
        center_lat: c.center.lat_deg(),
        center_lng: c.center.lng_deg(),
        address: c.address.as_deref(),
        radius_km: c.radius_km,
        icon_url: c.icon_url.as_ref().map(ToString::to_string),
        banner_url: c.banner_url.as_ref().map(ToString::to_string),
        admin_rowid,
        member_count: c.member_count as i64,
        report_count: c.report_count as i64,
        is_verified: c.is_verified,
        is_active: c.is_active,
        created_at: c.created_at.as_millis(),
        updated_at: c.updated_at.as_millis(),
    };
    diesel::insert_into(schema::communities::table)
        .values(&new_community)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_community(conn: &mut SqliteConnection, c: &Community) -> Result<()> {
    use schema::communities::dsl;
    let changeset = models::CommunityChangeset {
        name: &c.name,
        description: c.description.as_deref(),
        category: c.category.to_string(),
        center_lat: c.center.lat_deg(),
        center_lng: c.center.lng_deg(),
        address: c.address.as_deref(),
        radius_km: c.radius_km,
        icon_url: c.icon_url.as_ref().map(ToString::to_string),
        banner_url: c.banner_url.as_ref().map(ToString::to_string),
        member_count: c.member_count as i64,
        report_count: c.report_count as i64,
        is_verified: c.is_verified,
        is_active: c.is_active,
        updated_at: c.updated_at.as_millis(),
    };
    let count = diesel::update(dsl::communities.filter(dsl::id.eq(c.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_community(conn: &mut SqliteConnection, id: &Id) -> Result<Community> {
    schema::communities::table
        .inner_join(schema::users::table)
        .select(joined_community_columns!())
        .filter(schema::communities::id.eq(id.as_str()))
        .first::<models::JoinedCommunity>(conn)
        .map_err(from_diesel_err)
        .and_then(community_from_joined)
}

fn get_community_by_slug(conn: &mut SqliteConnection, slug: &str) -> Result<Community> {
    try_get_community_by_slug(conn, slug)?.ok_or(repo::Error::NotFound)
}

fn try_get_community_by_slug(
    conn: &mut SqliteConnection,
    slug: &str,
) -> Result<Option<Community>> {
    schema::communities::table
        .inner_join(schema::users::table)
        .select(joined_community_columns!())
        .filter(schema::communities::slug.eq(slug))
        .first::<models::JoinedCommunity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(community_from_joined)
        .transpose()
}

fn all_communities(conn: &mut SqliteConnection) -> Result<Vec<Community>> {
    schema::communities::table
        .inner_join(schema::users::table)
        .select(joined_community_columns!())
        .order_by(schema::communities::created_at.desc())
        .then_order_by(schema::communities::rowid.desc())
        .load::<models::JoinedCommunity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(community_from_joined)
        .collect()
}

fn count_communities(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::communities::dsl;
    Ok(dsl::communities
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
