pub mod authorization;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use smartpark_entities::{
        booking::*, feedback::*, id::*, image::*, password::*, space::*, time::*, user::*,
    };
}

pub use repositories::Error as RepoError;
