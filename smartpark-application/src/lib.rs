mod add_space_image;
mod create_booking;
mod create_space;
mod delete_space;
mod moderate_user;
mod queries;
mod register_user;
mod set_space_active;
mod submit_feedback;
mod transition_booking;
mod update_space;

pub mod prelude {
    pub use super::{
        add_space_image::*, create_booking::*, create_space::*, delete_space::*, moderate_user::*,
        queries::*, register_user::*, set_space_active::*, submit_feedback::*,
        transition_booking::*, update_space::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use smartpark_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use smartpark_db_sqlite::Connections;
}
