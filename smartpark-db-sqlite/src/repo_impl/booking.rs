use super::*;

impl<'a> BookingRepo for DbReadOnly<'a> {
    fn create_booking(&self, _booking: BookingRecord) -> Result<Booking> {
        unreachable!();
    }
    fn update_booking_status(&self, _id: Id, _status: BookingStatus) -> Result<()> {
        unreachable!();
    }

    fn get_booking(&self, id: Id) -> Result<Booking> {
        get_booking(&mut self.conn.borrow_mut(), id)
    }
    fn bookings_of_customer(&self, customer: Id) -> Result<Vec<Booking>> {
        bookings_of_customer(&mut self.conn.borrow_mut(), customer)
    }
    fn bookings_of_owner(&self, owner: Id) -> Result<Vec<Booking>> {
        bookings_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn bookings_of_space(&self, space: Id) -> Result<Vec<Booking>> {
        bookings_of_space(&mut self.conn.borrow_mut(), space)
    }
    fn count_bookings(&self) -> Result<usize> {
        count_bookings(&mut self.conn.borrow_mut())
    }
}

impl<'a> BookingRepo for DbReadWrite<'a> {
    fn create_booking(&self, booking: BookingRecord) -> Result<Booking> {
        create_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn update_booking_status(&self, id: Id, status: BookingStatus) -> Result<()> {
        update_booking_status(&mut self.conn.borrow_mut(), id, status)
    }

    fn get_booking(&self, id: Id) -> Result<Booking> {
        get_booking(&mut self.conn.borrow_mut(), id)
    }
    fn bookings_of_customer(&self, customer: Id) -> Result<Vec<Booking>> {
        bookings_of_customer(&mut self.conn.borrow_mut(), customer)
    }
    fn bookings_of_owner(&self, owner: Id) -> Result<Vec<Booking>> {
        bookings_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn bookings_of_space(&self, space: Id) -> Result<Vec<Booking>> {
        bookings_of_space(&mut self.conn.borrow_mut(), space)
    }
    fn count_bookings(&self) -> Result<usize> {
        count_bookings(&mut self.conn.borrow_mut())
    }
}

impl<'a> BookingRepo for DbConnection<'a> {
    fn create_booking(&self, booking: BookingRecord) -> Result<Booking> {
        create_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn update_booking_status(&self, id: Id, status: BookingStatus) -> Result<()> {
        update_booking_status(&mut self.conn.borrow_mut(), id, status)
    }

    fn get_booking(&self, id: Id) -> Result<Booking> {
        get_booking(&mut self.conn.borrow_mut(), id)
    }
    fn bookings_of_customer(&self, customer: Id) -> Result<Vec<Booking>> {
        bookings_of_customer(&mut self.conn.borrow_mut(), customer)
    }
    fn bookings_of_owner(&self, owner: Id) -> Result<Vec<Booking>> {
        bookings_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn bookings_of_space(&self, space: Id) -> Result<Vec<Booking>> {
        bookings_of_space(&mut self.conn.borrow_mut(), space)
    }
    fn count_bookings(&self) -> Result<usize> {
        count_bookings(&mut self.conn.borrow_mut())
    }
}

fn create_booking(conn: &mut SqliteConnection, record: BookingRecord) -> Result<Booking> {
    let created_at = Timestamp::now();
    let status = BookingStatus::default();
    let new_booking = models::NewBooking {
        space_id: record.space.into(),
        customer_id: record.customer.into(),
        owner_id: record.owner.into(),
        start_time: record.period.start().as_seconds(),
        end_time: record.period.end().as_seconds(),
        total_price: record.total_price,
        status: status.into(),
        created_at: created_at.as_seconds(),
    };
    diesel::insert_into(schema::bookings::table)
        .values(&new_booking)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_insert_id(conn)?;
    let BookingRecord {
        space,
        customer,
        owner,
        period,
        total_price,
    } = record;
    Ok(Booking {
        id,
        space,
        customer,
        owner,
        period,
        total_price,
        status,
        created_at,
    })
}

fn update_booking_status(conn: &mut SqliteConnection, id: Id, status: BookingStatus) -> Result<()> {
    use schema::bookings::dsl;
    let count = diesel::update(dsl::bookings.filter(dsl::id.eq(i64::from(id))))
        .set(dsl::status.eq(i16::from(status)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_booking(conn: &mut SqliteConnection, id: Id) -> Result<Booking> {
    use schema::bookings::dsl;
    let entity = dsl::bookings
        .filter(dsl::id.eq(i64::from(id)))
        .first::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?;
    util::booking_from_entity(entity)
}

fn bookings_of_customer(conn: &mut SqliteConnection, customer: Id) -> Result<Vec<Booking>> {
    use schema::bookings::dsl;
    dsl::bookings
        .filter(dsl::customer_id.eq(i64::from(customer)))
        .order(dsl::id.asc())
        .load::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::booking_from_entity)
        .collect()
}

fn bookings_of_owner(conn: &mut SqliteConnection, owner: Id) -> Result<Vec<Booking>> {
    use schema::bookings::dsl;
    dsl::bookings
        .filter(dsl::owner_id.eq(i64::from(owner)))
        .order(dsl::id.asc())
        .load::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::booking_from_entity)
        .collect()
}

fn bookings_of_space(conn: &mut SqliteConnection, space: Id) -> Result<Vec<Booking>> {
    use schema::bookings::dsl;
    dsl::bookings
        .filter(dsl::space_id.eq(i64::from(space)))
        .order(dsl::id.asc())
        .load::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::booking_from_entity)
        .collect()
}

fn count_bookings(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::bookings::dsl;
    Ok(dsl::bookings
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
