use super::*;

impl<'a> ImageRepo for DbReadOnly<'a> {
    fn add_image(&self, _space: Id, _url: &str, _primary: bool) -> Result<SpaceImage> {
        unreachable!();
    }
    fn demote_other_primary_images(&self, _space: Id, _keep: Id) -> Result<usize> {
        unreachable!();
    }

    fn images_of_space(&self, space: Id) -> Result<Vec<SpaceImage>> {
        images_of_space(&mut self.conn.borrow_mut(), space)
    }
}

impl<'a> ImageRepo for DbReadWrite<'a> {
    fn add_image(&self, space: Id, url: &str, primary: bool) -> Result<SpaceImage> {
        add_image(&mut self.conn.borrow_mut(), space, url, primary)
    }
    fn demote_other_primary_images(&self, space: Id, keep: Id) -> Result<usize> {
        demote_other_primary_images(&mut self.conn.borrow_mut(), space, keep)
    }

    fn images_of_space(&self, space: Id) -> Result<Vec<SpaceImage>> {
        images_of_space(&mut self.conn.borrow_mut(), space)
    }
}

impl<'a> ImageRepo for DbConnection<'a> {
    fn add_image(&self, space: Id, url: &str, primary: bool) -> Result<SpaceImage> {
        add_image(&mut self.conn.borrow_mut(), space, url, primary)
    }
    fn demote_other_primary_images(&self, space: Id, keep: Id) -> Result<usize> {
        demote_other_primary_images(&mut self.conn.borrow_mut(), space, keep)
    }

    fn images_of_space(&self, space: Id) -> Result<Vec<SpaceImage>> {
        images_of_space(&mut self.conn.borrow_mut(), space)
    }
}

fn add_image(conn: &mut SqliteConnection, space: Id, url: &str, primary: bool) -> Result<SpaceImage> {
    let uploaded_at = Timestamp::now();
    let new_image = models::NewSpaceImage {
        space_id: space.into(),
        url,
        is_primary: primary,
        uploaded_at: uploaded_at.as_seconds(),
    };
    diesel::insert_into(schema::space_images::table)
        .values(&new_image)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_insert_id(conn)?;
    Ok(SpaceImage {
        id,
        space,
        url: url.into(),
        primary,
        uploaded_at,
    })
}

fn demote_other_primary_images(conn: &mut SqliteConnection, space: Id, keep: Id) -> Result<usize> {
    use schema::space_images::dsl;
    diesel::update(
        dsl::space_images
            .filter(dsl::space_id.eq(i64::from(space)))
            .filter(dsl::id.ne(i64::from(keep)))
            .filter(dsl::is_primary.eq(true)),
    )
    .set(dsl::is_primary.eq(false))
    .execute(conn)
    .map_err(from_diesel_err)
}

fn images_of_space(conn: &mut SqliteConnection, space: Id) -> Result<Vec<SpaceImage>> {
    use schema::space_images::dsl;
    Ok(dsl::space_images
        .filter(dsl::space_id.eq(i64::from(space)))
        .order(dsl::id.asc())
        .load::<models::SpaceImageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::image_from_entity)
        .collect())
}
