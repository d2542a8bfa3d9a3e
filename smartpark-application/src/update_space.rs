use super::*;

pub fn update_space(
    connections: &sqlite::Connections,
    actor: Id,
    space: Id,
    draft: usecases::SpaceDraft,
) -> Result<ParkingSpace> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_space(conn, actor, space, draft).map_err(|err| {
            log::warn!("Failed to update parking space {}: {}", space, err);
            err
        })
    })?)
}
