use super::{authorize::authorize_admin, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub users: usize,
    pub verified_users: usize,
    pub spaces: usize,
    pub bookings: usize,
}

/// Overall marketplace counters for the admin dashboard.
pub fn gather_stats<R>(repo: &R, actor: Id) -> Result<Stats>
where
    R: UserRepo + SpaceRepo + BookingRepo,
{
    authorize_admin(repo, actor)?;
    Ok(Stats {
        users: repo.count_users()?,
        verified_users: repo.count_verified_users()?,
        spaces: repo.count_spaces()?,
        bookings: repo.count_bookings()?,
    })
}
