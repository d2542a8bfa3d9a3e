use super::*;

pub fn register_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register(conn, new_user).map_err(|err| {
            log::warn!("Failed to register user: {}", err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn register_two_users() {
        let fixture = BackendFixture::new();
        let first = flows::register_user(&fixture.db_connections, new_user("alice")).unwrap();
        assert_eq!(first.role, Role::MainAdmin);
        assert!(first.verified);

        let second = flows::register_user(&fixture.db_connections, new_user("bob")).unwrap();
        assert_eq!(second.role, Role::User);
        assert!(!second.verified);
        assert!(i64::from(second.id) > i64::from(first.id));
    }

    #[test]
    fn duplicate_registration_leaves_no_row_behind() {
        let fixture = BackendFixture::new();
        flows::register_user(&fixture.db_connections, new_user("alice")).unwrap();
        assert!(flows::register_user(&fixture.db_connections, new_user("alice")).is_err());

        let stats = flows::gather_stats(
            &fixture.db_connections,
            fixture.try_get_user("alice").unwrap().id,
        )
        .unwrap();
        assert_eq!(stats.users, 1);
    }
}
