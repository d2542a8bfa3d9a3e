use thiserror::Error;

use crate::{authorization, repositories, util::validate::SpaceInvalidation};
use smartpark_entities::{
    booking::BookingStatus, feedback::InvalidRatingValue, password::PasswordParseError,
};

#[derive(Debug, Error)]
pub enum Invalidity {
    #[error("The price is invalid")]
    Price,
    #[error("Latitude and longitude must be given together")]
    UnpairedCoordinates,
    #[error("Invalid coordinates")]
    Coordinates,
    #[error("Invalid availability window")]
    AvailabilityWindow,
    #[error("The booking must end after it starts")]
    BookingPeriod,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Invalid(#[from] Invalidity),
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("The requested object could not be found")]
    NotFound,
    #[error("A {status} booking does not admit this transition")]
    BookingState { status: BookingStatus },
    #[error("The user already exists")]
    UserExists,
    #[error("Feedback has already been submitted for this booking")]
    FeedbackExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The account has not been verified yet")]
    NotVerified,
    #[error(transparent)]
    Repo(repositories::Error),
}

impl From<repositories::Error> for Error {
    fn from(from: repositories::Error) -> Self {
        match from {
            repositories::Error::NotFound => Self::NotFound,
            err => Self::Repo(err),
        }
    }
}

impl From<PasswordParseError> for Error {
    fn from(_: PasswordParseError) -> Self {
        Self::Invalid(Invalidity::Password)
    }
}

impl From<InvalidRatingValue> for Error {
    fn from(_: InvalidRatingValue) -> Self {
        Self::Invalid(Invalidity::RatingValue)
    }
}

impl From<SpaceInvalidation> for Error {
    fn from(err: SpaceInvalidation) -> Self {
        match err {
            SpaceInvalidation::Price => Self::Invalid(Invalidity::Price),
        }
    }
}

impl From<authorization::user::Error> for Error {
    fn from(err: authorization::user::Error) -> Self {
        match err {
            authorization::user::Error::UnauthorizedRole => Self::Forbidden,
        }
    }
}
