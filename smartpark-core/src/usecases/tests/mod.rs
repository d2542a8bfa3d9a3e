use std::cell::{Cell, RefCell};

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, RepoError>;
use crate::repositories::Error as RepoError;

#[derive(Debug, Default)]
pub struct MockDb {
    next_id: Cell<i64>,
    pub users: RefCell<Vec<User>>,
    pub spaces: RefCell<Vec<ParkingSpace>>,
    pub images: RefCell<Vec<SpaceImage>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub feedback: RefCell<Vec<Feedback>>,
}

impl MockDb {
    fn next_id(&self) -> Id {
        self.next_id.set(self.next_id.get() + 1);
        Id::from(self.next_id.get())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: UserRecord) -> RepoResult<User> {
        let UserRecord {
            username,
            email,
            phone,
            password,
            verified,
            role,
        } = user;
        let user = User {
            id: self.next_id(),
            username,
            email,
            phone,
            password,
            verified,
            role,
            created_at: Timestamp::now(),
        };
        self.users.borrow_mut().push(user.clone());
        Ok(user)
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        for u in self.users.borrow_mut().iter_mut() {
            if u.id == user.id {
                *u = user.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_user(&self, id: Id) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    fn try_get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }

    fn count_verified_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().iter().filter(|u| u.verified).count())
    }
}

impl SpaceRepo for MockDb {
    fn create_space(&self, owner: Id, fields: SpaceFields) -> RepoResult<ParkingSpace> {
        let space = ParkingSpace::new(self.next_id(), owner, Timestamp::now(), fields);
        self.spaces.borrow_mut().push(space.clone());
        Ok(space)
    }

    fn update_space(&self, space: &ParkingSpace) -> RepoResult<()> {
        for s in self.spaces.borrow_mut().iter_mut() {
            if s.id == space.id {
                *s = space.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_space(&self, id: Id) -> RepoResult<()> {
        let mut spaces = self.spaces.borrow_mut();
        let Some(index) = spaces.iter().position(|s| s.id == id) else {
            return Err(RepoError::NotFound);
        };
        spaces.remove(index);
        // Emulate the cascading deletes of the real store.
        self.images.borrow_mut().retain(|img| img.space != id);
        let mut bookings = self.bookings.borrow_mut();
        let deleted: Vec<_> = bookings
            .iter()
            .filter(|b| b.space == id)
            .map(|b| b.id)
            .collect();
        bookings.retain(|b| b.space != id);
        self.feedback
            .borrow_mut()
            .retain(|f| !deleted.contains(&f.booking));
        Ok(())
    }

    fn get_space(&self, id: Id) -> RepoResult<ParkingSpace> {
        self.spaces
            .borrow()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn spaces_of_owner(&self, owner: Id) -> RepoResult<Vec<ParkingSpace>> {
        Ok(self
            .spaces
            .borrow()
            .iter()
            .filter(|s| s.owner == owner)
            .cloned()
            .collect())
    }

    fn query_spaces(&self, query: &SpaceQuery) -> RepoResult<Vec<ParkingSpace>> {
        // Literal substring match, case-insensitive for ASCII like the
        // SQLite implementation.
        let text = query.text.as_ref().map(|t| t.to_ascii_lowercase());
        Ok(self
            .spaces
            .borrow()
            .iter()
            .filter(|s| s.active)
            .filter(|s| {
                text.as_ref().map_or(true, |t| {
                    s.title.to_ascii_lowercase().contains(t.as_str())
                        || s.description.to_ascii_lowercase().contains(t.as_str())
                        || s.address.to_ascii_lowercase().contains(t.as_str())
                })
            })
            .filter(|s| query.min_price.map_or(true, |min| s.price_per_hour >= min))
            .filter(|s| query.max_price.map_or(true, |max| s.price_per_hour <= max))
            .cloned()
            .collect())
    }

    fn count_spaces(&self) -> RepoResult<usize> {
        Ok(self.spaces.borrow().len())
    }
}

impl ImageRepo for MockDb {
    fn add_image(&self, space: Id, url: &str, primary: bool) -> RepoResult<SpaceImage> {
        let image = SpaceImage {
            id: self.next_id(),
            space,
            url: url.into(),
            primary,
            uploaded_at: Timestamp::now(),
        };
        self.images.borrow_mut().push(image.clone());
        Ok(image)
    }

    fn images_of_space(&self, space: Id) -> RepoResult<Vec<SpaceImage>> {
        Ok(self
            .images
            .borrow()
            .iter()
            .filter(|img| img.space == space)
            .cloned()
            .collect())
    }

    fn demote_other_primary_images(&self, space: Id, keep: Id) -> RepoResult<usize> {
        let mut demoted = 0;
        for img in self.images.borrow_mut().iter_mut() {
            if img.space == space && img.id != keep && img.primary {
                img.primary = false;
                demoted += 1;
            }
        }
        Ok(demoted)
    }
}

impl BookingRepo for MockDb {
    fn create_booking(&self, booking: BookingRecord) -> RepoResult<Booking> {
        let BookingRecord {
            space,
            customer,
            owner,
            period,
            total_price,
        } = booking;
        let booking = Booking {
            id: self.next_id(),
            space,
            customer,
            owner,
            period,
            total_price,
            status: BookingStatus::Pending,
            created_at: Timestamp::now(),
        };
        self.bookings.borrow_mut().push(booking.clone());
        Ok(booking)
    }

    fn update_booking_status(&self, id: Id, status: BookingStatus) -> RepoResult<()> {
        for b in self.bookings.borrow_mut().iter_mut() {
            if b.id == id {
                b.status = status;
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn get_booking(&self, id: Id) -> RepoResult<Booking> {
        self.bookings
            .borrow()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn bookings_of_customer(&self, customer: Id) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.customer == customer)
            .cloned()
            .collect())
    }

    fn bookings_of_owner(&self, owner: Id) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.owner == owner)
            .cloned()
            .collect())
    }

    fn bookings_of_space(&self, space: Id) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.space == space)
            .cloned()
            .collect())
    }

    fn count_bookings(&self) -> RepoResult<usize> {
        Ok(self.bookings.borrow().len())
    }
}

impl FeedbackRepo for MockDb {
    fn create_feedback(&self, feedback: FeedbackRecord) -> RepoResult<Feedback> {
        let FeedbackRecord {
            booking,
            rating,
            comment,
        } = feedback;
        let feedback = Feedback {
            id: self.next_id(),
            booking,
            rating,
            comment,
            submitted_at: Timestamp::now(),
        };
        self.feedback.borrow_mut().push(feedback.clone());
        Ok(feedback)
    }

    fn try_get_feedback_of_booking(&self, booking: Id) -> RepoResult<Option<Feedback>> {
        Ok(self
            .feedback
            .borrow()
            .iter()
            .find(|f| f.booking == booking)
            .cloned())
    }

    fn feedback_of_space(&self, space: Id) -> RepoResult<Vec<Feedback>> {
        let bookings = self.bookings_of_space(space)?;
        Ok(self
            .feedback
            .borrow()
            .iter()
            .filter(|f| bookings.iter().any(|b| b.id == f.booking))
            .cloned()
            .collect())
    }

    fn feedback_for_owner(&self, owner: Id) -> RepoResult<Vec<Feedback>> {
        let bookings = self.bookings_of_owner(owner)?;
        Ok(self
            .feedback
            .borrow()
            .iter()
            .filter(|f| bookings.iter().any(|b| b.id == f.booking))
            .cloned()
            .collect())
    }
}
