use super::{create_space::parse_space_draft, prelude::*, SpaceDraft};

/// Replaces all mutable fields of a listing. Only the owner may edit.
pub fn update_space<R>(repo: &R, actor: Id, space: Id, draft: SpaceDraft) -> Result<ParkingSpace>
where
    R: SpaceRepo,
{
    let mut space = repo.get_space(space)?;
    if space.owner != actor {
        return Err(Error::Forbidden);
    }
    let fields = parse_space_draft(draft)?;
    space = ParkingSpace::new(space.id, space.owner, space.created_at, fields);
    repo.update_space(&space)?;
    Ok(space)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{create_space::tests::default_draft, tests::MockDb, *},
        *,
    };
    use smartpark_entities::builders::*;

    #[test]
    fn owner_replaces_all_fields() {
        let db = MockDb::default();
        db.spaces.borrow_mut().push(
            ParkingSpace::build()
                .id(1)
                .owner(1)
                .title("Old")
                .price_per_hour(3.0)
                .finish(),
        );
        let mut draft = default_draft("New");
        draft.price_per_hour = 4.5;
        let updated = update_space(&db, Id::from(1), Id::from(1), draft).unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(db.spaces.borrow()[0].title, "New");
        assert_eq!(db.spaces.borrow()[0].price_per_hour, 4.5);
    }

    #[test]
    fn only_the_owner_may_edit() {
        let db = MockDb::default();
        db.spaces
            .borrow_mut()
            .push(ParkingSpace::build().id(1).owner(1).title("Old").finish());
        assert!(matches!(
            update_space(&db, Id::from(2), Id::from(1), default_draft("New")),
            Err(Error::Forbidden)
        ));
        assert_eq!(db.spaces.borrow()[0].title, "Old");
    }

    #[test]
    fn unknown_space() {
        let db = MockDb::default();
        assert!(matches!(
            update_space(&db, Id::from(1), Id::from(9), default_draft("New")),
            Err(Error::NotFound)
        ));
    }

    #[test]
    fn invalid_draft_leaves_the_listing_untouched() {
        let db = MockDb::default();
        db.spaces
            .borrow_mut()
            .push(ParkingSpace::build().id(1).owner(1).title("Old").finish());
        let mut draft = default_draft("New");
        draft.price_per_hour = -1.0;
        assert!(update_space(&db, Id::from(1), Id::from(1), draft).is_err());
        assert_eq!(db.spaces.borrow()[0].title, "Old");
    }
}
