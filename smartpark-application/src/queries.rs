use super::*;
use smartpark_core::repositories::SpaceQuery;

// Read-only flows. These only need a shared database connection and
// no transaction.

pub fn login(connections: &sqlite::Connections, username: &str, password: &str) -> Result<User> {
    let credentials = usecases::Credentials { username, password };
    Ok(usecases::login(&connections.shared()?, &credentials)?)
}

pub fn get_space(
    connections: &sqlite::Connections,
    actor: Option<Id>,
    space: Id,
) -> Result<ParkingSpace> {
    Ok(usecases::get_space(&connections.shared()?, actor, space)?)
}

pub fn search_spaces(
    connections: &sqlite::Connections,
    query: SpaceQuery,
) -> Result<Vec<ParkingSpace>> {
    Ok(usecases::search_spaces(&connections.shared()?, query)?)
}

pub fn spaces_of_owner(connections: &sqlite::Connections, owner: Id) -> Result<Vec<ParkingSpace>> {
    Ok(usecases::spaces_of_owner(&connections.shared()?, owner)?)
}

pub fn images_of_space(connections: &sqlite::Connections, space: Id) -> Result<Vec<SpaceImage>> {
    Ok(usecases::images_of_space(&connections.shared()?, space)?)
}

pub fn my_bookings(connections: &sqlite::Connections, user: Id) -> Result<usecases::MyBookings> {
    Ok(usecases::my_bookings(&connections.shared()?, user)?)
}

pub fn owner_rating(
    connections: &sqlite::Connections,
    owner: Id,
) -> Result<Option<AvgRatingValue>> {
    Ok(usecases::owner_rating(&connections.shared()?, owner)?)
}

pub fn gather_stats(connections: &sqlite::Connections, actor: Id) -> Result<usecases::Stats> {
    Ok(usecases::gather_stats(&connections.shared()?, actor)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use smartpark_core::repositories::SpaceQuery;

    #[test]
    fn login_round_trip() {
        let fixture = BackendFixture::new();
        fixture.register_verified_user("alice");
        assert!(flows::login(&fixture.db_connections, "alice", "secret").is_ok());
        assert!(flows::login(&fixture.db_connections, "alice", "wrong!").is_err());
        assert!(flows::login(&fixture.db_connections, "nobody", "secret").is_err());
    }

    #[test]
    fn search_by_text_and_price() {
        let fixture = BackendFixture::new();
        let owner = fixture.register_verified_user("owner");
        fixture.create_space(owner, "Downtown Garage", 5.0);
        fixture.create_space(owner, "Airport Lot", 20.0);

        let query = SpaceQuery {
            text: Some("downtown".into()),
            ..Default::default()
        };
        let found = flows::search_spaces(&fixture.db_connections, query).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Downtown Garage");

        let query = SpaceQuery {
            min_price: Some(10.0),
            ..Default::default()
        };
        let found = flows::search_spaces(&fixture.db_connections, query).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Airport Lot");
    }

    #[test]
    fn search_matches_wildcard_characters_literally() {
        let fixture = BackendFixture::new();
        let owner = fixture.register_verified_user("owner");
        fixture.create_space(owner, "Downtown Garage", 5.0);
        fixture.create_space(owner, "Lot 100% covered", 8.0);

        // "%" and "_" are ordinary characters in a search term,
        // not SQL wildcards.
        let query = SpaceQuery {
            text: Some("%".into()),
            ..Default::default()
        };
        let found = flows::search_spaces(&fixture.db_connections, query).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Lot 100% covered");

        let query = SpaceQuery {
            text: Some("_".into()),
            ..Default::default()
        };
        let found = flows::search_spaces(&fixture.db_connections, query).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn stats_are_admin_only() {
        let fixture = BackendFixture::new();
        let admin = fixture.register_verified_user("admin");
        let user = fixture.register_verified_user("user");
        let owner = fixture.register_verified_user("owner");
        let space = fixture.create_space(owner, "Garage", 5.0);
        fixture.create_booking(user, space);

        let stats = flows::gather_stats(&fixture.db_connections, admin).unwrap();
        assert_eq!(stats.users, 3);
        assert_eq!(stats.verified_users, 3);
        assert_eq!(stats.spaces, 1);
        assert_eq!(stats.bookings, 1);

        assert!(flows::gather_stats(&fixture.db_connections, user).is_err());
    }
}
