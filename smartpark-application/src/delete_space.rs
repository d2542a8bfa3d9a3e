use super::*;

pub fn delete_space(connections: &sqlite::Connections, actor: Id, space: Id) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_space(conn, actor, space).map_err(|err| {
            log::warn!("Failed to delete parking space {}: {}", space, err);
            err
        })
    })?)
}
