use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

/// Registers a new account.
///
/// The very first account becomes the verified main administrator,
/// everyone after that starts out as an unverified ordinary user.
pub fn register<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    if !validate::is_valid_email(&u.email) {
        return Err(Error::Invalid(Invalidity::Email));
    }
    if repo.try_get_user_by_username(&u.username)?.is_some() {
        return Err(Error::UserExists);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let bootstrap = repo.count_users()? == 0;
    let (role, verified) = if bootstrap {
        (Role::MainAdmin, true)
    } else {
        (Role::User, false)
    };
    log::debug!("Creating new user: username = {}", u.username);
    let user = repo.create_user(UserRecord {
        username: u.username,
        email: u.email,
        phone: u.phone,
        password,
        verified,
        role,
    })?;
    Ok(user)
}
