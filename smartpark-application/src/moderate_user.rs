use super::*;

pub fn set_user_verified(
    connections: &sqlite::Connections,
    actor: Id,
    user: Id,
    verified: bool,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::set_user_verified(conn, actor, user, verified).map_err(|err| {
            log::warn!("Failed to change verification of user {}: {}", user, err);
            err
        })
    })?)
}

pub fn change_user_role(
    connections: &sqlite::Connections,
    actor: Id,
    user: Id,
    role: Role,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::change_user_role(conn, actor, user, role).map_err(|err| {
            log::warn!("Failed to change role of user {}: {}", user, err);
            err
        })
    })?)
}
