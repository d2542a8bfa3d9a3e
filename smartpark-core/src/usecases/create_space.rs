use super::prelude::*;
use crate::util::validate::Validate as _;

/// Unvalidated listing data as submitted by an owner.
#[derive(Debug, Clone)]
pub struct SpaceDraft {
    pub title: String,
    pub description: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price_per_hour: f64,
    pub availability_start: TimeOfDay,
    pub availability_end: TimeOfDay,
    pub active: bool,
}

pub(crate) fn parse_space_draft(draft: SpaceDraft) -> Result<SpaceFields> {
    let SpaceDraft {
        title,
        description,
        address,
        latitude,
        longitude,
        price_per_hour,
        availability_start,
        availability_end,
        active,
    } = draft;
    let location = match (latitude, longitude) {
        (None, None) => None,
        (Some(lat), Some(lng)) => Some(
            Coordinates::try_new(lat, lng).ok_or(Error::Invalid(Invalidity::Coordinates))?,
        ),
        _ => return Err(Error::Invalid(Invalidity::UnpairedCoordinates)),
    };
    let availability = AvailabilityWindow::new(availability_start, availability_end)
        .ok_or(Error::Invalid(Invalidity::AvailabilityWindow))?;
    let fields = SpaceFields {
        title,
        description,
        address,
        location,
        price_per_hour,
        availability,
        active,
    };
    fields.validate()?;
    Ok(fields)
}

pub fn create_space<R>(repo: &R, owner: Id, draft: SpaceDraft) -> Result<ParkingSpace>
where
    R: UserRepo + SpaceRepo,
{
    let owner = repo.get_user(owner)?;
    let fields = parse_space_draft(draft)?;
    log::debug!("Creating new parking space: title = {}", fields.title);
    Ok(repo.create_space(owner.id, fields)?)
}

#[cfg(test)]
pub mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use smartpark_entities::builders::*;

    pub fn default_draft(title: &str) -> SpaceDraft {
        SpaceDraft {
            title: title.into(),
            description: "".into(),
            address: "".into(),
            latitude: None,
            longitude: None,
            price_per_hour: 5.0,
            availability_start: TimeOfDay::from_hm(8, 0).unwrap(),
            availability_end: TimeOfDay::from_hm(20, 0).unwrap(),
            active: true,
        }
    }

    #[test]
    fn create_and_store_a_listing() {
        let db = MockDb::default();
        db.users.borrow_mut().push(User::build().id(1).finish());
        let space = create_space(&db, Id::from(1), default_draft("Garage")).unwrap();
        assert_eq!(space.owner, Id::from(1));
        assert_eq!(db.spaces.borrow().len(), 1);
        assert_eq!(db.spaces.borrow()[0].title, "Garage");
    }

    #[test]
    fn reject_unknown_owner() {
        let db = MockDb::default();
        assert!(matches!(
            create_space(&db, Id::from(7), default_draft("Garage")),
            Err(Error::NotFound)
        ));
        assert!(db.spaces.borrow().is_empty());
    }

    #[test]
    fn reject_non_positive_price() {
        let db = MockDb::default();
        db.users.borrow_mut().push(User::build().id(1).finish());
        let mut draft = default_draft("Garage");
        draft.price_per_hour = 0.0;
        assert!(matches!(
            create_space(&db, Id::from(1), draft),
            Err(Error::Invalid(Invalidity::Price))
        ));
    }

    #[test]
    fn reject_unpaired_coordinates() {
        let db = MockDb::default();
        db.users.borrow_mut().push(User::build().id(1).finish());
        let mut draft = default_draft("Garage");
        draft.latitude = Some(48.1);
        assert!(matches!(
            create_space(&db, Id::from(1), draft),
            Err(Error::Invalid(Invalidity::UnpairedCoordinates))
        ));
    }

    #[test]
    fn reject_out_of_range_coordinates() {
        let db = MockDb::default();
        db.users.borrow_mut().push(User::build().id(1).finish());
        let mut draft = default_draft("Garage");
        draft.latitude = Some(91.0);
        draft.longitude = Some(11.5);
        assert!(matches!(
            create_space(&db, Id::from(1), draft),
            Err(Error::Invalid(Invalidity::Coordinates))
        ));
    }

    #[test]
    fn reject_inverted_availability_window() {
        let db = MockDb::default();
        db.users.borrow_mut().push(User::build().id(1).finish());
        let mut draft = default_draft("Garage");
        draft.availability_start = TimeOfDay::from_hm(20, 0).unwrap();
        draft.availability_end = TimeOfDay::from_hm(8, 0).unwrap();
        assert!(matches!(
            create_space(&db, Id::from(1), draft),
            Err(Error::Invalid(Invalidity::AvailabilityWindow))
        ));
    }
}
