use super::*;

pub fn transition_booking(
    connections: &sqlite::Connections,
    actor: Id,
    booking: Id,
    action: usecases::BookingAction,
) -> Result<Booking> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::transition_booking(conn, actor, booking, action).map_err(|err| {
            log::warn!("Failed to transition booking {}: {}", booking, err);
            err
        })
    })?)
}
