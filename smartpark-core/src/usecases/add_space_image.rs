use super::prelude::*;

/// Attaches an image to a listing. Only the owner may upload.
///
/// The first image of a space automatically becomes the primary one.
/// When `primary` is requested explicitly, any previously primary
/// image of the same space is demoted, so at most one image per space
/// carries the flag at any time.
pub fn add_space_image<R>(
    repo: &R,
    actor: Id,
    space: Id,
    url: &str,
    primary: bool,
) -> Result<SpaceImage>
where
    R: SpaceRepo + ImageRepo,
{
    let space = repo.get_space(space)?;
    if space.owner != actor {
        return Err(Error::Forbidden);
    }
    let has_primary = repo
        .images_of_space(space.id)?
        .iter()
        .any(|img| img.primary);
    let primary = primary || !has_primary;
    let image = repo.add_image(space.id, url, primary)?;
    if primary && has_primary {
        repo.demote_other_primary_images(space.id, image.id)?;
    }
    Ok(image)
}
