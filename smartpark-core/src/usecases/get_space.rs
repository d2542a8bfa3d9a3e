use super::prelude::*;

/// Loads a single listing.
///
/// Deactivated listings stay visible to their owner and to
/// administrators but are reported as missing to everyone else.
pub fn get_space<R>(repo: &R, actor: Option<Id>, space: Id) -> Result<ParkingSpace>
where
    R: UserRepo + SpaceRepo,
{
    let space = repo.get_space(space)?;
    if space.active {
        return Ok(space);
    }
    let Some(actor) = actor else {
        return Err(Error::NotFound);
    };
    if space.owner == actor || repo.get_user(actor)?.is_admin() {
        Ok(space)
    } else {
        Err(Error::NotFound)
    }
}
