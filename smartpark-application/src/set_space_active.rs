use super::*;

pub fn set_space_active(
    connections: &sqlite::Connections,
    actor: Id,
    space: Id,
    active: bool,
) -> Result<ParkingSpace> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::set_space_active(conn, actor, space, active).map_err(|err| {
            log::warn!("Failed to change active flag of space {}: {}", space, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use smartpark_core::repositories::SpaceQuery;

    #[test]
    fn deactivated_listing_leaves_the_catalog() {
        let fixture = BackendFixture::new();
        let owner = fixture.register_verified_user("owner");
        let space = fixture.create_space(owner, "Garage", 5.0);

        let found =
            flows::search_spaces(&fixture.db_connections, SpaceQuery::default()).unwrap();
        assert_eq!(found.len(), 1);

        flows::set_space_active(&fixture.db_connections, owner, space, false).unwrap();
        let found =
            flows::search_spaces(&fixture.db_connections, SpaceQuery::default()).unwrap();
        assert!(found.is_empty());

        // Still visible to the owner and restorable.
        assert!(flows::get_space(&fixture.db_connections, Some(owner), space).is_ok());
        flows::set_space_active(&fixture.db_connections, owner, space, true).unwrap();
        let found =
            flows::search_spaces(&fixture.db_connections, SpaceQuery::default()).unwrap();
        assert_eq!(found.len(), 1);
    }
}
