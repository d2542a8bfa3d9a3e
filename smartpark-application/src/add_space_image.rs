use super::*;

pub fn add_space_image(
    connections: &sqlite::Connections,
    actor: Id,
    space: Id,
    url: &str,
    primary: bool,
) -> Result<SpaceImage> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::add_space_image(conn, actor, space, url, primary).map_err(|err| {
            log::warn!("Failed to add image to space {}: {}", space, err);
            err
        })
    })?)
}
