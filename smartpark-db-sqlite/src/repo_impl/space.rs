use super::*;

impl<'a> SpaceRepo for DbReadOnly<'a> {
    fn create_space(&self, _owner: Id, _fields: SpaceFields) -> Result<ParkingSpace> {
        unreachable!();
    }
    fn update_space(&self, _space: &ParkingSpace) -> Result<()> {
        unreachable!();
    }
    fn delete_space(&self, _id: Id) -> Result<()> {
        unreachable!();
    }

    fn get_space(&self, id: Id) -> Result<ParkingSpace> {
        get_space(&mut self.conn.borrow_mut(), id)
    }
    fn spaces_of_owner(&self, owner: Id) -> Result<Vec<ParkingSpace>> {
        spaces_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn query_spaces(&self, query: &SpaceQuery) -> Result<Vec<ParkingSpace>> {
        query_spaces(&mut self.conn.borrow_mut(), query)
    }
    fn count_spaces(&self) -> Result<usize> {
        count_spaces(&mut self.conn.borrow_mut())
    }
}

impl<'a> SpaceRepo for DbReadWrite<'a> {
    fn create_space(&self, owner: Id, fields: SpaceFields) -> Result<ParkingSpace> {
        create_space(&mut self.conn.borrow_mut(), owner, fields)
    }
    fn update_space(&self, space: &ParkingSpace) -> Result<()> {
        update_space(&mut self.conn.borrow_mut(), space)
    }
    fn delete_space(&self, id: Id) -> Result<()> {
        delete_space(&mut self.conn.borrow_mut(), id)
    }

    fn get_space(&self, id: Id) -> Result<ParkingSpace> {
        get_space(&mut self.conn.borrow_mut(), id)
    }
    fn spaces_of_owner(&self, owner: Id) -> Result<Vec<ParkingSpace>> {
        spaces_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn query_spaces(&self, query: &SpaceQuery) -> Result<Vec<ParkingSpace>> {
        query_spaces(&mut self.conn.borrow_mut(), query)
    }
    fn count_spaces(&self) -> Result<usize> {
        count_spaces(&mut self.conn.borrow_mut())
    }
}

impl<'a> SpaceRepo for DbConnection<'a> {
    fn create_space(&self, owner: Id, fields: SpaceFields) -> Result<ParkingSpace> {
        create_space(&mut self.conn.borrow_mut(), owner, fields)
    }
    fn update_space(&self, space: &ParkingSpace) -> Result<()> {
        update_space(&mut self.conn.borrow_mut(), space)
    }
    fn delete_space(&self, id: Id) -> Result<()> {
        delete_space(&mut self.conn.borrow_mut(), id)
    }

    fn get_space(&self, id: Id) -> Result<ParkingSpace> {
        get_space(&mut self.conn.borrow_mut(), id)
    }
    fn spaces_of_owner(&self, owner: Id) -> Result<Vec<ParkingSpace>> {
        spaces_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn query_spaces(&self, query: &SpaceQuery) -> Result<Vec<ParkingSpace>> {
        query_spaces(&mut self.conn.borrow_mut(), query)
    }
    fn count_spaces(&self) -> Result<usize> {
        count_spaces(&mut self.conn.borrow_mut())
    }
}

fn new_space<'a>(owner: Id, fields: &'a SpaceFields, created_at: Timestamp) -> models::NewSpace<'a> {
    models::NewSpace {
        owner_id: owner.into(),
        title: &fields.title,
        description: &fields.description,
        address: &fields.address,
        lat: fields.location.map(|l| l.lat()),
        lng: fields.location.map(|l| l.lng()),
        price_per_hour: fields.price_per_hour,
        availability_start: fields.availability.start().as_minutes() as i16,
        availability_end: fields.availability.end().as_minutes() as i16,
        active: fields.active,
        created_at: created_at.as_seconds(),
    }
}

fn create_space(conn: &mut SqliteConnection, owner: Id, fields: SpaceFields) -> Result<ParkingSpace> {
    let created_at = Timestamp::now();
    diesel::insert_into(schema::spaces::table)
        .values(&new_space(owner, &fields, created_at))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_insert_id(conn)?;
    Ok(ParkingSpace::new(id, owner, created_at, fields))
}

fn update_space(conn: &mut SqliteConnection, space: &ParkingSpace) -> Result<()> {
    use schema::spaces::dsl;
    let fields = space.fields();
    let count = diesel::update(dsl::spaces.filter(dsl::id.eq(i64::from(space.id))))
        .set(&new_space(space.owner, &fields, space.created_at))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

// Images, bookings and feedback are removed by cascading deletes.
fn delete_space(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::spaces::dsl;
    let count = diesel::delete(dsl::spaces.filter(dsl::id.eq(i64::from(id))))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_space(conn: &mut SqliteConnection, id: Id) -> Result<ParkingSpace> {
    use schema::spaces::dsl;
    let entity = dsl::spaces
        .filter(dsl::id.eq(i64::from(id)))
        .first::<models::SpaceEntity>(conn)
        .map_err(from_diesel_err)?;
    util::space_from_entity(entity)
}

fn spaces_of_owner(conn: &mut SqliteConnection, owner: Id) -> Result<Vec<ParkingSpace>> {
    use schema::spaces::dsl;
    dsl::spaces
        .filter(dsl::owner_id.eq(i64::from(owner)))
        .order(dsl::id.asc())
        .load::<models::SpaceEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::space_from_entity)
        .collect()
}

// The search term must match literally, so LIKE metacharacters
// in it are escaped.
fn like_pattern(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn query_spaces(conn: &mut SqliteConnection, query: &SpaceQuery) -> Result<Vec<ParkingSpace>> {
    use schema::spaces::dsl;
    let mut q = dsl::spaces.filter(dsl::active.eq(true)).into_boxed();
    if let Some(text) = &query.text {
        // LIKE is case-insensitive for ASCII in SQLite
        let pattern = like_pattern(text);
        q = q.filter(
            dsl::title
                .like(pattern.clone())
                .escape('\\')
                .or(dsl::description.like(pattern.clone()).escape('\\'))
                .or(dsl::address.like(pattern).escape('\\')),
        );
    }
    if let Some(min_price) = query.min_price {
        q = q.filter(dsl::price_per_hour.ge(min_price));
    }
    if let Some(max_price) = query.max_price {
        q = q.filter(dsl::price_per_hour.le(max_price));
    }
    q.order(dsl::id.asc())
        .load::<models::SpaceEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::space_from_entity)
        .collect()
}

fn count_spaces(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::spaces::dsl;
    Ok(dsl::spaces
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
