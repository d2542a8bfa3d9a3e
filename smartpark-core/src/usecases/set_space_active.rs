use super::prelude::*;

/// Activates or deactivates a listing. Deactivated listings disappear
/// from the public catalog but keep their bookings and images.
///
/// Allowed for the owner and for administrators.
pub fn set_space_active<R>(repo: &R, actor: Id, space: Id, active: bool) -> Result<ParkingSpace>
where
    R: UserRepo + SpaceRepo,
{
    let actor = repo.get_user(actor)?;
    let mut space = repo.get_space(space)?;
    if space.owner != actor.id && !actor.is_admin() {
        return Err(Error::Forbidden);
    }
    if space.active != active {
        log::info!(
            "{} parking space {}",
            if active { "Activating" } else { "Deactivating" },
            space.id
        );
        space.active = active;
        repo.update_space(&space)?;
    }
    Ok(space)
}
