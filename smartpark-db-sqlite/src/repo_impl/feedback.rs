use super::*;

impl<'a> FeedbackRepo for DbReadOnly<'a> {
    fn create_feedback(&self, _feedback: FeedbackRecord) -> Result<Feedback> {
        unreachable!();
    }

    fn try_get_feedback_of_booking(&self, booking: Id) -> Result<Option<Feedback>> {
        try_get_feedback_of_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn feedback_of_space(&self, space: Id) -> Result<Vec<Feedback>> {
        feedback_of_space(&mut self.conn.borrow_mut(), space)
    }
    fn feedback_for_owner(&self, owner: Id) -> Result<Vec<Feedback>> {
        feedback_for_owner(&mut self.conn.borrow_mut(), owner)
    }
}

impl<'a> FeedbackRepo for DbReadWrite<'a> {
    fn create_feedback(&self, feedback: FeedbackRecord) -> Result<Feedback> {
        create_feedback(&mut self.conn.borrow_mut(), feedback)
    }

    fn try_get_feedback_of_booking(&self, booking: Id) -> Result<Option<Feedback>> {
        try_get_feedback_of_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn feedback_of_space(&self, space: Id) -> Result<Vec<Feedback>> {
        feedback_of_space(&mut self.conn.borrow_mut(), space)
    }
    fn feedback_for_owner(&self, owner: Id) -> Result<Vec<Feedback>> {
        feedback_for_owner(&mut self.conn.borrow_mut(), owner)
    }
}

impl<'a> FeedbackRepo for DbConnection<'a> {
    fn create_feedback(&self, feedback: FeedbackRecord) -> Result<Feedback> {
        create_feedback(&mut self.conn.borrow_mut(), feedback)
    }

    fn try_get_feedback_of_booking(&self, booking: Id) -> Result<Option<Feedback>> {
        try_get_feedback_of_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn feedback_of_space(&self, space: Id) -> Result<Vec<Feedback>> {
        feedback_of_space(&mut self.conn.borrow_mut(), space)
    }
    fn feedback_for_owner(&self, owner: Id) -> Result<Vec<Feedback>> {
        feedback_for_owner(&mut self.conn.borrow_mut(), owner)
    }
}

fn create_feedback(conn: &mut SqliteConnection, record: FeedbackRecord) -> Result<Feedback> {
    let submitted_at = Timestamp::now();
    let new_feedback = models::NewFeedback {
        booking_id: record.booking.into(),
        rating: i16::from(i8::from(record.rating)),
        comment: &record.comment,
        submitted_at: submitted_at.as_seconds(),
    };
    diesel::insert_into(schema::feedbacks::table)
        .values(&new_feedback)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_insert_id(conn)?;
    let FeedbackRecord {
        booking,
        rating,
        comment,
    } = record;
    Ok(Feedback {
        id,
        booking,
        rating,
        comment,
        submitted_at,
    })
}

fn try_get_feedback_of_booking(
    conn: &mut SqliteConnection,
    booking: Id,
) -> Result<Option<Feedback>> {
    use schema::feedbacks::dsl;
    dsl::feedbacks
        .filter(dsl::booking_id.eq(i64::from(booking)))
        .first::<models::FeedbackEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(util::feedback_from_entity)
        .transpose()
}

fn feedback_of_space(conn: &mut SqliteConnection, space: Id) -> Result<Vec<Feedback>> {
    schema::feedbacks::table
        .inner_join(schema::bookings::table)
        .filter(schema::bookings::space_id.eq(i64::from(space)))
        .select(schema::feedbacks::all_columns)
        .order(schema::feedbacks::id.asc())
        .load::<models::FeedbackEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::feedback_from_entity)
        .collect()
}

fn feedback_for_owner(conn: &mut SqliteConnection, owner: Id) -> Result<Vec<Feedback>> {
    schema::feedbacks::table
        .inner_join(schema::bookings::table)
        .filter(schema::bookings::owner_id.eq(i64::from(owner)))
        .select(schema::feedbacks::all_columns)
        .order(schema::feedbacks::id.asc())
        .load::<models::FeedbackEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::feedback_from_entity)
        .collect()
}
