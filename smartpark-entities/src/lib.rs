#![deny(missing_debug_implementations)]

//! # smartpark-entities
//!
//! Reusable, agnostic domain entities for SmartPark.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod booking;
pub mod feedback;
pub mod id;
pub mod image;
pub mod password;
pub mod space;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
