use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::EnumString;
use thiserror::Error;

use crate::{id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub username   : String,
    pub email      : String,
    pub phone      : Option<String>,
    pub password   : Password,
    pub verified   : bool,
    pub role       : Role,
    pub created_at : Timestamp,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role >= Role::Admin
    }
}

pub type RolePrimitive = i16;

/// Trust level of an account. The main administrator is created once by
/// the registration bootstrap and keeps that role forever.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    #[default]
    User      = 0,
    Admin     = 1,
    MainAdmin = 2,
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().expect("Role primitive")
    }
}
