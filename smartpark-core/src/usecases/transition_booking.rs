use super::prelude::*;

/// The transitions of the booking lifecycle.
///
/// `Confirm` and `Reject` belong to the owner, `Cancel` to the
/// customer and `Complete` to either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Confirm,
    Reject,
    Cancel,
    Complete,
}

pub fn transition_booking<R>(
    repo: &R,
    actor: Id,
    booking: Id,
    action: BookingAction,
) -> Result<Booking>
where
    R: BookingRepo,
{
    use BookingAction as A;
    use BookingStatus as S;

    let mut booking = repo.get_booking(booking)?;
    let authorized = match action {
        A::Confirm | A::Reject => actor == booking.owner,
        A::Cancel => actor == booking.customer,
        A::Complete => actor == booking.owner || actor == booking.customer,
    };
    if !authorized {
        return Err(Error::Forbidden);
    }
    let next = match (action, booking.status) {
        (A::Confirm, S::Pending) => S::Confirmed,
        (A::Reject, S::Pending) => S::Cancelled,
        (A::Cancel, S::Pending | S::Confirmed) => S::Cancelled,
        (A::Complete, S::Confirmed) => S::Completed,
        (_, status) => return Err(Error::BookingState { status }),
    };
    log::info!("Booking {}: {} -> {}", booking.id, booking.status, next);
    repo.update_booking_status(booking.id, next)?;
    booking.status = next;
    Ok(booking)
}
