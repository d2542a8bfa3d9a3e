use super::{authorize::authorize_admin, prelude::*};

/// Marks an account as verified or revokes the verification.
/// Administrators only.
pub fn set_user_verified<R>(repo: &R, actor: Id, user: Id, verified: bool) -> Result<User>
where
    R: UserRepo,
{
    authorize_admin(repo, actor)?;
    let mut user = repo.get_user(user)?;
    if user.verified != verified {
        log::info!("Setting verified = {} for user {}", verified, user.id);
        user.verified = verified;
        repo.update_user(&user)?;
    }
    Ok(user)
}

/// Switches an account between the ordinary and the admin role.
/// Administrators only.
///
/// The main administrator is created once at bootstrap. The role can
/// neither be assigned nor taken away here, and admins cannot demote
/// themselves.
pub fn change_user_role<R>(repo: &R, actor: Id, user: Id, role: Role) -> Result<User>
where
    R: UserRepo,
{
    let actor = authorize_admin(repo, actor)?;
    if role == Role::MainAdmin || actor.id == user {
        return Err(Error::Forbidden);
    }
    let mut user = repo.get_user(user)?;
    if user.role == Role::MainAdmin {
        return Err(Error::Forbidden);
    }
    if user.role != role {
        log::info!("Changing role to {:?} for user {}", role, user.id);
        user.role = role;
        repo.update_user(&user)?;
    }
    Ok(user)
}
