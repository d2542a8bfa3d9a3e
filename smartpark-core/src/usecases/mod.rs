mod add_space_image;
mod authorize;
mod change_user_role;
mod create_booking;
mod create_space;
mod delete_space;
mod error;
mod get_space;
mod login;
mod register;
mod search_spaces;
mod set_space_active;
mod stats;
mod submit_feedback;
mod transition_booking;
mod update_space;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    add_space_image::*, authorize::*, change_user_role::*, create_booking::*, create_space::*,
    delete_space::*, error::*, get_space::*, login::*, register::*, search_spaces::*,
    set_space_active::*, stats::*, submit_feedback::*, transition_booking::*, update_space::*,
};

mod prelude {
    pub use super::error::{Error, Invalidity};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn spaces_of_owner<R>(repo: &R, owner: Id) -> Result<Vec<ParkingSpace>>
where
    R: SpaceRepo,
{
    Ok(repo.spaces_of_owner(owner)?)
}

/// Bookings as seen from both sides of the marketplace.
#[derive(Debug, Default)]
pub struct MyBookings {
    /// Bookings the user made as a customer.
    pub made: Vec<Booking>,
    /// Bookings received on spaces the user owns.
    pub received: Vec<Booking>,
}

pub fn my_bookings<R>(repo: &R, user: Id) -> Result<MyBookings>
where
    R: BookingRepo,
{
    Ok(MyBookings {
        made: repo.bookings_of_customer(user)?,
        received: repo.bookings_of_owner(user)?,
    })
}

pub fn owner_rating<R>(repo: &R, owner: Id) -> Result<Option<AvgRatingValue>>
where
    R: UserRepo + FeedbackRepo,
{
    use crate::rating::Rated as _;
    let owner = repo.get_user(owner)?;
    let feedback = repo.feedback_for_owner(owner.id)?;
    Ok(owner.avg_rating(&feedback))
}

pub fn images_of_space<R>(repo: &R, space: Id) -> Result<Vec<SpaceImage>>
where
    R: ImageRepo,
{
    Ok(repo.images_of_space(space)?)
}
