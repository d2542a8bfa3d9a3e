use diesel::{self, prelude::*, result::Error as DieselError};

use smartpark_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, util, DbConnection, DbReadOnly, DbReadWrite, SqliteConnection};

mod booking;
mod feedback;
mod image;
mod space;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_insert_id(conn: &mut SqliteConnection) -> Result<Id> {
    let id = diesel::select(util::last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(Id::from(id))
}
