use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub booking: Id,
    pub rating: i8,
    pub comment: String,
}

/// Leaves feedback on a booking.
///
/// Only the customer of a completed booking may submit, and only once.
pub fn submit_feedback<R>(repo: &R, actor: Id, feedback: NewFeedback) -> Result<Feedback>
where
    R: BookingRepo + FeedbackRepo,
{
    let rating = RatingValue::try_from(feedback.rating)?;
    let booking = repo.get_booking(feedback.booking)?;
    if booking.customer != actor {
        return Err(Error::Forbidden);
    }
    if booking.status != BookingStatus::Completed {
        return Err(Error::BookingState {
            status: booking.status,
        });
    }
    if repo.try_get_feedback_of_booking(booking.id)?.is_some() {
        return Err(Error::FeedbackExists);
    }
    Ok(repo.create_feedback(FeedbackRecord {
        booking: booking.id,
        rating,
        comment: feedback.comment,
    })?)
}
