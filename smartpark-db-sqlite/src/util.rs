use anyhow::anyhow;

use smartpark_core::{entities::*, repositories as repo};

use super::models;

type Result<T> = std::result::Result<T, repo::Error>;

diesel::define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

// Converting stored rows back into domain entities can fail when the
// database contains values that would never pass validation on insert.
// Such rows are reported instead of being silently skipped.

pub fn user_from_entity(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        username,
        email,
        phone,
        password,
        verified,
        role,
        created_at,
    } = entity;
    let role = Role::try_from(role).map_err(|err| anyhow!("User {id}: {err}"))?;
    Ok(User {
        id: id.into(),
        username,
        email,
        phone,
        password: password.into(),
        verified,
        role,
        created_at: Timestamp::from_seconds(created_at),
    })
}

fn time_of_day_from_minutes(minutes: i16) -> Option<TimeOfDay> {
    u16::try_from(minutes).ok().and_then(TimeOfDay::from_minutes)
}

pub fn space_from_entity(entity: models::SpaceEntity) -> Result<ParkingSpace> {
    let models::SpaceEntity {
        id,
        owner_id,
        title,
        description,
        address,
        lat,
        lng,
        price_per_hour,
        availability_start,
        availability_end,
        active,
        created_at,
    } = entity;
    let location = match (lat, lng) {
        (None, None) => None,
        (Some(lat), Some(lng)) => Some(
            Coordinates::try_new(lat, lng)
                .ok_or_else(|| anyhow!("Space {id}: invalid coordinates"))?,
        ),
        _ => return Err(anyhow!("Space {id}: unpaired coordinates").into()),
    };
    let availability = time_of_day_from_minutes(availability_start)
        .zip(time_of_day_from_minutes(availability_end))
        .and_then(|(start, end)| AvailabilityWindow::new(start, end))
        .ok_or_else(|| anyhow!("Space {id}: invalid availability window"))?;
    Ok(ParkingSpace {
        id: id.into(),
        owner: owner_id.into(),
        title,
        description,
        address,
        location,
        price_per_hour,
        availability,
        active,
        created_at: Timestamp::from_seconds(created_at),
    })
}

pub fn image_from_entity(entity: models::SpaceImageEntity) -> SpaceImage {
    let models::SpaceImageEntity {
        id,
        space_id,
        url,
        is_primary,
        uploaded_at,
    } = entity;
    SpaceImage {
        id: id.into(),
        space: space_id.into(),
        url,
        primary: is_primary,
        uploaded_at: Timestamp::from_seconds(uploaded_at),
    }
}

pub fn booking_from_entity(entity: models::BookingEntity) -> Result<Booking> {
    let models::BookingEntity {
        id,
        space_id,
        customer_id,
        owner_id,
        start_time,
        end_time,
        total_price,
        status,
        created_at,
    } = entity;
    let period = TimePeriod::new(
        Timestamp::from_seconds(start_time),
        Timestamp::from_seconds(end_time),
    )
    .ok_or_else(|| anyhow!("Booking {id}: invalid period"))?;
    let status = BookingStatus::try_from(status).map_err(|err| anyhow!("Booking {id}: {err}"))?;
    Ok(Booking {
        id: id.into(),
        space: space_id.into(),
        customer: customer_id.into(),
        owner: owner_id.into(),
        period,
        total_price,
        status,
        created_at: Timestamp::from_seconds(created_at),
    })
}

pub fn feedback_from_entity(entity: models::FeedbackEntity) -> Result<Feedback> {
    let models::FeedbackEntity {
        id,
        booking_id,
        rating,
        comment,
        submitted_at,
    } = entity;
    let rating = i8::try_from(rating)
        .ok()
        .and_then(|r| RatingValue::try_from(r).ok())
        .ok_or_else(|| anyhow!("Feedback {id}: invalid rating value {rating}"))?;
    Ok(Feedback {
        id: id.into(),
        booking: booking_id.into(),
        rating,
        comment,
        submitted_at: Timestamp::from_seconds(submitted_at),
    })
}
