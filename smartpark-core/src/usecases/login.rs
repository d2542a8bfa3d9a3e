use super::prelude::*;

#[derive(Debug)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn login<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_username(login.username)
        .map_err(Error::from)
        .and_then(|user| {
            if let Some(u) = user {
                if u.password.verify(login.password) {
                    if u.verified {
                        Ok(u)
                    } else {
                        Err(Error::NotVerified)
                    }
                } else {
                    Err(Error::Credentials)
                }
            } else {
                Err(Error::Credentials)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use smartpark_entities::builders::*;

    fn user_with_password(username: &str, password: &str, verified: bool) -> User {
        let mut user = User::build()
            .username(username)
            .verified(verified)
            .finish();
        user.password = password.parse().unwrap();
        user
    }

    #[test]
    fn correct_credentials() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(user_with_password("alice", "secret", true));
        let credentials = Credentials {
            username: "alice",
            password: "secret",
        };
        assert_eq!(login(&db, &credentials).unwrap().username, "alice");
    }

    #[test]
    fn wrong_password_and_unknown_user() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(user_with_password("alice", "secret", true));
        assert!(matches!(
            login(
                &db,
                &Credentials {
                    username: "alice",
                    password: "wrong!",
                }
            ),
            Err(Error::Credentials)
        ));
        assert!(matches!(
            login(
                &db,
                &Credentials {
                    username: "nobody",
                    password: "secret",
                }
            ),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn unverified_account() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(user_with_password("alice", "secret", false));
        assert!(matches!(
            login(
                &db,
                &Credentials {
                    username: "alice",
                    password: "secret",
                }
            ),
            Err(Error::NotVerified)
        ));
    }
}
