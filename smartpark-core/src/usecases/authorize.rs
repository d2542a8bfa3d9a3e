use super::prelude::*;
use crate::authorization::user::authorize_role;

/// Loads the acting user and checks the admin role.
pub fn authorize_admin<R: UserRepo>(repo: &R, actor: Id) -> Result<User> {
    let actor = repo.get_user(actor)?;
    authorize_role(&actor, Role::Admin)?;
    Ok(actor)
}
