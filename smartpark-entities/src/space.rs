use std::fmt;

use crate::{
    id::Id,
    time::{TimeOfDay, Timestamp},
};

/// Geographic position of a listing, for map display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    pub fn try_new(lat: f64, lng: f64) -> Option<Self> {
        ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng))
            .then_some(Self { lat, lng })
    }

    pub const fn lat(&self) -> f64 {
        self.lat
    }

    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Daily time-of-day window during which a space is offered.
///
/// Construction guarantees that the window starts before it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl AvailabilityWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    pub const fn end(&self) -> TimeOfDay {
        self.end
    }
}

impl fmt::Display for AvailabilityWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// Mutable part of a space listing, replaced wholesale on update.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceFields {
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: Option<Coordinates>,
    pub price_per_hour: f64,
    pub availability: AvailabilityWindow,
    pub active: bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpace {
    pub id             : Id,
    pub owner          : Id,
    pub title          : String,
    pub description    : String,
    pub address        : String,
    pub location       : Option<Coordinates>,
    pub price_per_hour : f64,
    pub availability   : AvailabilityWindow,
    pub active         : bool,
    pub created_at     : Timestamp,
}

impl ParkingSpace {
    pub fn new(id: Id, owner: Id, created_at: Timestamp, fields: SpaceFields) -> Self {
        let SpaceFields {
            title,
            description,
            address,
            location,
            price_per_hour,
            availability,
            active,
        } = fields;
        Self {
            id,
            owner,
            title,
            description,
            address,
            location,
            price_per_hour,
            availability,
            active,
            created_at,
        }
    }

    pub fn fields(&self) -> SpaceFields {
        SpaceFields {
            title: self.title.clone(),
            description: self.description.clone(),
            address: self.address.clone(),
            location: self.location,
            price_per_hour: self.price_per_hour,
            availability: self.availability,
            active: self.active,
        }
    }
}
