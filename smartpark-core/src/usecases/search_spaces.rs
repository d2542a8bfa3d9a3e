use super::prelude::*;

/// Searches the public catalog. Only active listings are returned.
///
/// A text term matches case-insensitively as a substring of the title,
/// description or address. The price range bounds are inclusive.
pub fn search_spaces<R>(repo: &R, query: SpaceQuery) -> Result<Vec<ParkingSpace>>
where
    R: SpaceRepo,
{
    if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
        if min > max {
            return Err(Error::Invalid(Invalidity::Price));
        }
    }
    Ok(repo.query_spaces(&query)?)
}
