use super::*;

pub fn create_space(
    connections: &sqlite::Connections,
    owner: Id,
    draft: usecases::SpaceDraft,
) -> Result<ParkingSpace> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_space(conn, owner, draft).map_err(|err| {
            log::warn!("Failed to create parking space: {}", err);
            err
        })
    })?)
}
