use super::prelude::*;

#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub space: Id,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// Price quote for a period at an hourly rate. Fractions of an hour
/// are charged proportionally.
pub fn quote_total_price(period: TimePeriod, price_per_hour: f64) -> f64 {
    period.hours() * price_per_hour
}

/// Books a space for a period. The booking starts out pending until
/// the owner confirms or rejects it.
///
/// Overlapping bookings of the same space are accepted deliberately;
/// the owner arbitrates conflicts when confirming. The daily
/// availability window is advisory and not checked here either.
pub fn create_booking<R>(repo: &R, customer: Id, request: BookingRequest) -> Result<Booking>
where
    R: UserRepo + SpaceRepo + BookingRepo,
{
    let customer = repo.get_user(customer)?;
    let space = repo.get_space(request.space)?;
    if !space.active {
        return Err(Error::NotFound);
    }
    if space.owner == customer.id {
        return Err(Error::Forbidden);
    }
    let period = TimePeriod::new(request.start, request.end)
        .ok_or(Error::Invalid(Invalidity::BookingPeriod))?;
    let total_price = quote_total_price(period, space.price_per_hour);
    let booking = repo.create_booking(BookingRecord {
        space: space.id,
        customer: customer.id,
        owner: space.owner,
        period,
        total_price,
    })?;
    log::debug!(
        "Created booking {} for space {} at a total of {}",
        booking.id,
        booking.space,
        booking.total_price
    );
    Ok(booking)
}
