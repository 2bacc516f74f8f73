use super::*;

impl<'a> CommunityMemberRepo for DbReadOnly<'a> {
    fn add_community_member(&self, _member: &CommunityMember) -> Result<()> {
        unreachable!();
    }
    fn update_community_member_role(
        &self,
        _community_id: &Id,
        _user_id: &Id,
        _role: MemberRole,
    ) -> Result<()> {
        unreachable!();
    }

    fn try_get_community_member(
        &self,
        community_id: &Id,
        user_id: &Id,
    ) -> Result<Option<CommunityMember>> {
        try_get_community_member(&mut self.conn.borrow_mut(), community_id, user_id)
    }

    fn community_members(&self, community_id: &Id) -> Result<Vec<CommunityMember>> {
        community_members(&mut self.conn.borrow_mut(), community_id)
    }
    fn count_community_members(&self, community_id: &Id) -> Result<usize> {
        count_community_members(&mut self.conn.borrow_mut(), community_id)
    }
}

impl<'a> CommunityMemberRepo for DbReadWrite<'a> {
    fn add_community_member(&self, member: &CommunityMember) -> Result<()> {
        add_community_member(&mut self.conn.borrow_mut(), member)
    }
    fn update_community_member_role(
        &self,
        community_id: &Id,
        user_id: &Id,
        role: MemberRole,
    ) -> Result<()> {
        update_community_member_role(&mut self.conn.borrow_mut(), community_id, user_id, role)
    }

    fn try_get_community_member(
        &self,
        community_id: &Id,
        user_id: &Id,
    ) -> Result<Option<CommunityMember>> {
        try_get_community_member(&mut self.conn.borrow_mut(), community_id, user_id)
    }

    fn community_members(&self, community_id: &Id) -> Result<Vec<CommunityMember>> {
        community_members(&mut self.conn.borrow_mut(), community_id)
    }
    fn count_community_members(&self, community_id: &Id) -> Result<usize> {
        count_community_members(&mut self.conn.borrow_mut(), community_id)
    }
}

impl<'a> CommunityMemberRepo for DbConnection<'a> {
    fn add_community_member(&self, member: &CommunityMember) -> Result<()> {
        add_community_member(&mut self.conn.borrow_mut(), member)
    }
    fn update_community_member_role(
        &self,
        community_id: &Id,
        user_id: &Id,
        role: MemberRole,
    ) -> Result<()> {
        update_community_member_role(&mut self.conn.borrow_mut(), community_id, user_id, role)
    }

    fn try_get_community_member(
        &self,
        community_id: &Id,
        user_id: &Id,
    ) -> Result<Option<CommunityMember>> {
        try_get_community_member(&mut self.conn.borrow_mut(), community_id, user_id)
    }

    fn community_members(&self, community_id: &Id) -> Result<Vec<CommunityMember>> {
        community_members(&mut self.conn.borrow_mut(), community_id)
    }
    fn count_community_members(&self, community_id: &Id) -> Result<usize> {
        count_community_members(&mut self.conn.borrow_mut(), community_id)
    }
}

macro_rules! joined_member_columns {
    () => {
        (
            schema::community_members::role,
            schema::community_members::created_at,
            schema::communities::id,
            schema::users::id,
        )
    };
}

fn add_community_member(conn: &mut SqliteConnection, m: &CommunityMember) -> Result<()> {
    let community_rowid = resolve_community_rowid(conn, &m.community_id)?;
    let user_rowid = resolve_user_rowid(conn, &m.user_id)?;
    let new_member = models::NewCommunityMember {
        community_rowid,
        user_rowid,
        role: m.role.into(),
        created_at: m.created_at.as_millis(),
    };
    // The unique (community, user) constraint turns duplicate
    // insertions into `AlreadyExists`.
    diesel::insert_into(schema::community_members::table)
        .values(&new_member)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_community_member_role(
    conn: &mut SqliteConnection,
    community_id: &Id,
    user_id: &Id,
    role: MemberRole,
) -> Result<()> {
    use schema::community_members::dsl;
    let community_rowid = resolve_community_rowid(conn, community_id)?;
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let count = diesel::update(
        dsl::community_members
            .filter(dsl::community_rowid.eq(community_rowid))
            .filter(dsl::user_rowid.eq(user_rowid)),
    )
    .set(dsl::role.eq(i16::from(role)))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn try_get_community_member(
    conn: &mut SqliteConnection,
    community_id: &Id,
    user_id: &Id,
) -> Result<Option<CommunityMember>> {
    schema::community_members::table
        .inner_join(schema::communities::table)
        .inner_join(schema::users::table)
        .select(joined_member_columns!())
        .filter(schema::communities::id.eq(community_id.as_str()))
        .filter(schema::users::id.eq(user_id.as_str()))
        .first::<models::JoinedCommunityMember>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(member_from_joined)
        .transpose()
}

fn community_members(
    conn: &mut SqliteConnection,
    community_id: &Id,
) -> Result<Vec<CommunityMember>> {
    schema::community_members::table
        .inner_join(schema::communities::table)
        .inner_join(schema::users::table)
        .select(joined_member_columns!())
        .filter(schema::communities::id.eq(community_id.as_str()))
        .order_by(schema::community_members::created_at.asc())
        .load::<models::JoinedCommunityMember>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(member_from_joined)
        .collect()
}

fn count_community_members(conn: &mut SqliteConnection, community_id: &Id) -> Result<usize> {
    Ok(schema::community_members::table
        .inner_join(schema::communities::table)
        .filter(schema::communities::id.eq(community_id.as_str()))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
