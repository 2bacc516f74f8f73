use super::*;

impl<'a> ReportRepo for DbReadOnly<'a> {
    fn create_report(&self, _report: &Report) -> Result<()> {
        unreachable!();
    }
    fn update_report(&self, _report: &Report) -> Result<()> {
        unreachable!();
    }
    fn delete_report(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_report(&self, id: &Id) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }

    fn reports_of_community(&self, community_id: &Id) -> Result<Vec<Report>> {
        reports_of_community(&mut self.conn.borrow_mut(), community_id)
    }
    fn all_reports(&self) -> Result<Vec<Report>> {
        all_reports(&mut self.conn.borrow_mut())
    }

    fn count_reports(&self) -> Result<usize> {
        count_reports(&mut self.conn.borrow_mut())
    }
}

impl<'a> ReportRepo for DbReadWrite<'a> {
    fn create_report(&self, report: &Report) -> Result<()> {
        create_report(&mut self.conn.borrow_mut(), report)
    }
    fn update_report(&self, report: &Report) -> Result<()> {
        update_report(&mut self.conn.borrow_mut(), report)
    }
    fn delete_report(&self, id: &Id) -> Result<()> {
        delete_report(&mut self.conn.borrow_mut(), id)
    }

    fn get_report(&self, id: &Id) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }

    fn reports_of_community(&self, community_id: &Id) -> Result<Vec<Report>> {
        reports_of_community(&mut self.conn.borrow_mut(), community_id)
    }
    fn all_reports(&self) -> Result<Vec<Report>> {
        all_reports(&mut self.conn.borrow_mut())
    }

    fn count_reports(&self) -> Result<usize> {
        count_reports(&mut self.conn.borrow_mut())
    }
}

impl<'a> ReportRepo for DbConnection<'a> {
    fn create_report(&self, report: &Report) -> Result<()> {
        create_report(&mut self.conn.borrow_mut(), report)
    }
    fn update_report(&self, report: &Report) -> Result<()> {
        update_report(&mut self.conn.borrow_mut(), report)
    }
    fn delete_report(&self, id: &Id) -> Result<()> {
        delete_report(&mut self.conn.borrow_mut(), id)
    }

    fn get_report(&self, id: &Id) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }

    fn reports_of_community(&self, community_id: &Id) -> Result<Vec<Report>> {
        reports_of_community(&mut self.conn.borrow_mut(), community_id)
    }
    fn all_reports(&self) -> Result<Vec<Report>> {
        all_reports(&mut self.conn.borrow_mut())
    }

    fn count_reports(&self) -> Result<usize> {
        count_reports(&mut self.conn.borrow_mut())
    }
}

// The owner and the optional community scope are stored as rowid
// references and joined back into their public ids when loading.
macro_rules! joined_report_columns {
    () => {
        (
            schema::reports::rowid,
            schema::reports::id,
            schema::reports::title,
            schema::reports::description,
            schema::reports::category,
            schema::reports::status,
            schema::reports::priority,
            schema::reports::lat,
            schema::reports::lng,
            schema::reports::address,
            schema::reports::image_url,
            schema::reports::resolved_at,
            schema::reports::resolution_notes,
            schema::reports::upvote_count,
            schema::reports::view_count,
            schema::reports::created_at,
            schema::reports::updated_at,
            schema::users::id,
            schema::communities::id.nullable(),
        )
    };
}

fn create_report(conn: &mut SqliteConnection, r: &Report) -> Result<()> {
    let created_by = resolve_user_rowid(conn, &r.created_by)?;
    let community_rowid = r
        .community_id
        .as_ref()
        .map(|id| resolve_community_rowid(conn, id))
        .transpose()?;
    let new_report = models::NewReport {
        id: r.id.as_str(),
        title: &r.title,
        description: r.description.as_deref(),
        category: &r.category,
        status: r.status.into(),
        priority: r.priority.into(),
        lat: r.pos.lat_deg(),
        lng: r.pos.lng_deg(),
        address: r.address.as_deref(),
        image_url: r.image_url.as_ref().map(ToString::to_string),
        community_rowid,
        created_by,
        resolved_at: r.resolved_at.map(Timestamp::as_millis),
        resolution_notes: r.resolution_notes.as_deref(),
        upvote_count: r.upvote_count as i64,
        view_count: r.view_count as i64,
        created_at: r.created_at.as_millis(),
        updated_at: r.updated_at.as_millis(),
    };
    diesel::insert_into(schema::reports::table)
        .values(&new_report)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_report(conn: &mut SqliteConnection, r: &Report) -> Result<()> {
    use schema::reports::dsl;
    let changeset = models::ReportChangeset {
        title: &r.title,
        description: r.description.as_deref(),
        category: &r.category,
        status: r.status.into(),
        priority: r.priority.into(),
        lat: r.pos.lat_deg(),
        lng: r.pos.lng_deg(),
        address: r.address.as_deref(),
        image_url: r.image_url.as_ref().map(ToString::to_string),
        resolved_at: r.resolved_at.map(Timestamp::as_millis),
        resolution_notes: r.resolution_notes.as_deref(),
        upvote_count: r.upvote_count as i64,
        view_count: r.view_count as i64,
        updated_at: r.updated_at.as_millis(),
    };
    let count = diesel::update(dsl::reports.filter(dsl::id.eq(r.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_report(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::reports::dsl;
    let count = diesel::delete(dsl::reports.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_report(conn: &mut SqliteConnection, id: &Id) -> Result<Report> {
    schema::reports::table
        .inner_join(schema::users::table)
        .left_join(schema::communities::table)
        .select(joined_report_columns!())
        .filter(schema::reports::id.eq(id.as_str()))
        .first::<models::JoinedReport>(conn)
        .map_err(from_diesel_err)
        .and_then(report_from_joined)
}

fn reports_of_community(
    conn: &mut SqliteConnection,
    community_id: &Id,
) -> Result<Vec<Report>> {
    schema::reports::table
        .inner_join(schema::users::table)
        .left_join(schema::communities::table)
        .select(joined_report_columns!())
        .filter(schema::communities::id.eq(community_id.as_str()))
        .order_by(schema::reports::created_at.asc())
        .then_order_by(schema::reports::rowid.asc())
        .load::<models::JoinedReport>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(report_from_joined)
        .collect()
}

fn all_reports(conn: &mut SqliteConnection) -> Result<Vec<Report>> {
    schema::reports::table
        .inner_join(schema::users::table)
        .left_join(schema::communities::table)
        .select(joined_report_columns!())
        .order_by(schema::reports::created_at.desc())
        .then_order_by(schema::reports::rowid.desc())
        .load::<models::JoinedReport>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(report_from_joined)
        .collect()
}

fn count_reports(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::reports::dsl;
    Ok(dsl::reports
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
