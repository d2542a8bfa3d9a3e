use super::prelude::*;

/// Removes a listing together with its images, bookings and feedback.
/// Only the owner may delete.
pub fn delete_space<R>(repo: &R, actor: Id, space: Id) -> Result<()>
where
    R: SpaceRepo,
{
    let space = repo.get_space(space)?;
    if space.owner != actor {
        return Err(Error::Forbidden);
    }
    log::info!("Deleting parking space {}", space.id);
    Ok(repo.delete_space(space.id)?)
}
