use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::{
    id::Id,
    time::{TimePeriod, Timestamp},
};

pub type BookingStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BookingStatus {
    Pending   = 0,
    Confirmed = 1,
    Cancelled = 2,
    Completed = 3,
}

impl BookingStatus {
    /// `Cancelled` and `Completed` admit no further transition.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    pub const fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Error)]
#[error("Invalid booking status primitive: {0}")]
pub struct InvalidBookingStatusPrimitive(BookingStatusPrimitive);

impl TryFrom<BookingStatusPrimitive> for BookingStatus {
    type Error = InvalidBookingStatusPrimitive;
    fn try_from(from: BookingStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidBookingStatusPrimitive(from))
    }
}

impl From<BookingStatus> for BookingStatusPrimitive {
    fn from(from: BookingStatus) -> Self {
        from.to_i16().expect("Booking status primitive")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id          : Id,
    pub space       : Id,
    pub customer    : Id,
    /// Owner of the space at the time the booking was created. An owner
    /// transfer on the space does not retroactively change who received
    /// this booking.
    pub owner       : Id,
    pub period      : TimePeriod,
    pub total_price : f64,
    pub status      : BookingStatus,
    pub created_at  : Timestamp,
}
