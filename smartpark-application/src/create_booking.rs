use super::*;

pub fn create_booking(
    connections: &sqlite::Connections,
    customer: Id,
    request: usecases::BookingRequest,
) -> Result<Booking> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_booking(conn, customer, request).map_err(|err| {
            log::warn!("Failed to create booking: {}", err);
            err
        })
    })?)
}
