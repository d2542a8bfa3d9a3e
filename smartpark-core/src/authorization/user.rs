use smartpark_entities::user::{Role, User};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartpark_entities::builders::*;

    #[test]
    fn role_must_be_at_least_the_required_one() {
        let user = User::build().role(Role::User).finish();
        assert!(authorize_role(&user, Role::User).is_ok());
        assert!(authorize_role(&user, Role::Admin).is_err());

        let admin = User::build().role(Role::Admin).finish();
        assert!(authorize_role(&admin, Role::User).is_ok());
        assert!(authorize_role(&admin, Role::Admin).is_ok());
        assert!(authorize_role(&admin, Role::MainAdmin).is_err());
    }
}
