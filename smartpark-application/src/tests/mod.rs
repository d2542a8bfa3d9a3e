pub mod prelude {

    pub use smartpark_core::{
        entities::*,
        repositories::{Error as RepoError, UserRepo as _},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub fn new_user(username: &str) -> usecases::NewUser {
        usecases::NewUser {
            username: username.into(),
            email: format!("{username}@example.com"),
            phone: None,
            password: "secret".into(),
        }
    }

    pub fn default_space_draft(title: &str) -> usecases::SpaceDraft {
        usecases::SpaceDraft {
            title: title.into(),
            description: "".into(),
            address: "".into(),
            latitude: None,
            longitude: None,
            price_per_hour: 5.0,
            availability_start: TimeOfDay::from_hm(8, 0).unwrap(),
            availability_end: TimeOfDay::from_hm(20, 0).unwrap(),
            active: true,
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            smartpark_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            );
            Self { db_connections }
        }

        /// Registers a user and marks the account as verified so that
        /// it can act right away.
        pub fn register_verified_user(&self, username: &str) -> Id {
            let mut user = flows::register_user(&self.db_connections, new_user(username)).unwrap();
            if !user.verified {
                user.verified = true;
                self.db_connections
                    .exclusive()
                    .unwrap()
                    .transaction(|conn| conn.update_user(&user))
                    .unwrap();
            }
            user.id
        }

        pub fn try_get_user(&self, username: &str) -> Option<User> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user_by_username(username)
                .unwrap()
        }

        pub fn create_space(&self, owner: Id, title: &str, price_per_hour: f64) -> Id {
            let mut draft = default_space_draft(title);
            draft.price_per_hour = price_per_hour;
            flows::create_space(&self.db_connections, owner, draft)
                .unwrap()
                .id
        }

        /// Books one hour, leaving the booking pending.
        pub fn create_booking(&self, customer: Id, space: Id) -> Id {
            let request = usecases::BookingRequest {
                space,
                start: Timestamp::from_seconds(0),
                end: Timestamp::from_seconds(3_600),
            };
            flows::create_booking(&self.db_connections, customer, request)
                .unwrap()
                .id
        }
    }
}
