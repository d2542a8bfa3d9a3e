use smartpark_entities::{feedback::*, user::*};

pub trait Rated {
    fn avg_rating(&self, _: &[Feedback]) -> Option<AvgRatingValue>;
}

/// Average over all feedback left on bookings this owner received.
impl Rated for User {
    fn avg_rating(&self, feedback: &[Feedback]) -> Option<AvgRatingValue> {
        feedback
            .iter()
            .fold(AvgRatingBuilder::default(), |mut acc, f| {
                acc.add(f.rating);
                acc
            })
            .build()
    }
}
