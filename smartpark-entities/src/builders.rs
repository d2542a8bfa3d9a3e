pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{booking_builder::*, space_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn verified(mut self, verified: bool) -> Self {
            self.user.verified = verified;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            Self::Build {
                user: User {
                    id: Id::default(),
                    username: "".into(),
                    email: "user@example.com".into(),
                    phone: None,
                    password: Password::from(String::new()),
                    verified: true,
                    role: Role::User,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod space_builder {

    use super::*;
    use crate::{id::*, space::*, time::*};

    #[derive(Debug)]
    pub struct ParkingSpaceBuild {
        space: ParkingSpace,
    }

    impl ParkingSpaceBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.space.id = id.into();
            self
        }
        pub fn owner(mut self, owner: i64) -> Self {
            self.space.owner = owner.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.space.title = title.into();
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.space.description = description.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.space.address = address.into();
            self
        }
        pub fn price_per_hour(mut self, price: f64) -> Self {
            self.space.price_per_hour = price;
            self
        }
        pub fn active(mut self, active: bool) -> Self {
            self.space.active = active;
            self
        }
        pub fn finish(self) -> ParkingSpace {
            self.space
        }
    }

    impl Builder for ParkingSpace {
        type Build = ParkingSpaceBuild;
        fn build() -> Self::Build {
            let availability = AvailabilityWindow::new(
                TimeOfDay::from_hm(8, 0).unwrap(),
                TimeOfDay::from_hm(20, 0).unwrap(),
            )
            .unwrap();
            Self::Build {
                space: ParkingSpace {
                    id: Id::default(),
                    owner: Id::default(),
                    title: "".into(),
                    description: "".into(),
                    address: "".into(),
                    location: None,
                    price_per_hour: 1.0,
                    availability,
                    active: true,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, id::*, time::*};

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn space(mut self, space: i64) -> Self {
            self.booking.space = space.into();
            self
        }
        pub fn customer(mut self, customer: i64) -> Self {
            self.booking.customer = customer.into();
            self
        }
        pub fn owner(mut self, owner: i64) -> Self {
            self.booking.owner = owner.into();
            self
        }
        pub fn period(mut self, start_seconds: i64, end_seconds: i64) -> Self {
            self.booking.period = TimePeriod::new(
                Timestamp::from_seconds(start_seconds),
                Timestamp::from_seconds(end_seconds),
            )
            .unwrap();
            self
        }
        pub fn total_price(mut self, total_price: f64) -> Self {
            self.booking.total_price = total_price;
            self
        }
        pub fn status(mut self, status: BookingStatus) -> Self {
            self.booking.status = status;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> Self::Build {
            let period = TimePeriod::new(
                Timestamp::from_seconds(0),
                Timestamp::from_seconds(3_600),
            )
            .unwrap();
            Self::Build {
                booking: Booking {
                    id: Id::default(),
                    space: Id::default(),
                    customer: Id::default(),
                    owner: Id::default(),
                    period,
                    total_price: 0.0,
                    status: BookingStatus::Pending,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
