// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// A user as handed to the store. The id is assigned on insert.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: Password,
    pub verified: bool,
    pub role: Role,
}

pub trait UserRepo {
    fn create_user(&self, user: UserRecord) -> Result<User>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: Id) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    fn count_users(&self) -> Result<usize>;
    fn count_verified_users(&self) -> Result<usize>;
}

/// Filter for the public catalog search. All criteria are optional
/// and conjunctive.
#[derive(Debug, Default, Clone)]
pub struct SpaceQuery {
    pub text: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

pub trait SpaceRepo {
    fn create_space(&self, owner: Id, fields: SpaceFields) -> Result<ParkingSpace>;
    fn update_space(&self, space: &ParkingSpace) -> Result<()>;
    fn delete_space(&self, id: Id) -> Result<()>;

    fn get_space(&self, id: Id) -> Result<ParkingSpace>;
    fn spaces_of_owner(&self, owner: Id) -> Result<Vec<ParkingSpace>>;

    // Only active spaces
    fn query_spaces(&self, query: &SpaceQuery) -> Result<Vec<ParkingSpace>>;

    fn count_spaces(&self) -> Result<usize>;
}

pub trait ImageRepo {
    fn add_image(&self, space: Id, url: &str, primary: bool) -> Result<SpaceImage>;
    fn images_of_space(&self, space: Id) -> Result<Vec<SpaceImage>>;

    /// Clears the primary flag on all images of the space except `keep`.
    /// Returns the number of demoted images.
    fn demote_other_primary_images(&self, space: Id, keep: Id) -> Result<usize>;
}

/// A booking as handed to the store. The id is assigned on insert,
/// the status starts out as `Pending`.
#[derive(Debug, Clone)]
pub struct BookingRecord {
    pub space: Id,
    pub customer: Id,
    pub owner: Id,
    pub period: TimePeriod,
    pub total_price: f64,
}

pub trait BookingRepo {
    fn create_booking(&self, booking: BookingRecord) -> Result<Booking>;
    fn update_booking_status(&self, id: Id, status: BookingStatus) -> Result<()>;

    fn get_booking(&self, id: Id) -> Result<Booking>;
    fn bookings_of_customer(&self, customer: Id) -> Result<Vec<Booking>>;
    fn bookings_of_owner(&self, owner: Id) -> Result<Vec<Booking>>;
    fn bookings_of_space(&self, space: Id) -> Result<Vec<Booking>>;

    fn count_bookings(&self) -> Result<usize>;
}

#[derive(Debug, Clone)]
pub struct FeedbackRecord {
    pub booking: Id,
    pub rating: RatingValue,
    pub comment: String,
}

pub trait FeedbackRepo {
    fn create_feedback(&self, feedback: FeedbackRecord) -> Result<Feedback>;

    fn try_get_feedback_of_booking(&self, booking: Id) -> Result<Option<Feedback>>;
    fn feedback_of_space(&self, space: Id) -> Result<Vec<Feedback>>;
    fn feedback_for_owner(&self, owner: Id) -> Result<Vec<Feedback>>;
}
