use thiserror::Error;

use crate::{id::Id, time::Timestamp};

/// A star rating between 1 and 5 (inclusive).
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct RatingValue(i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Rating value out of range")]
pub struct InvalidRatingValue;

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl TryFrom<i8> for RatingValue {
    type Error = InvalidRatingValue;
    fn try_from(from: i8) -> Result<Self, Self::Error> {
        let value = Self(from);
        if !value.is_valid() {
            return Err(InvalidRatingValue);
        }
        Ok(value)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// Arithmetic mean of one or more rating values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingBuilder {
    acc: i64,
    cnt: usize,
}

impl AvgRatingBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(i8::from(val));
        self.cnt += 1;
    }

    /// `None` when no value has been added ("no ratings yet").
    pub fn build(self) -> Option<AvgRatingValue> {
        (self.cnt > 0).then(|| AvgRatingValue(self.acc as f64 / self.cnt as f64))
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id           : Id,
    pub booking      : Id,
    pub rating       : RatingValue,
    pub comment      : String,
    pub submitted_at : Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_range() {
        assert!(RatingValue::try_from(0).is_err());
        assert!(RatingValue::try_from(6).is_err());
        assert!(RatingValue::try_from(1).is_ok());
        assert!(RatingValue::try_from(5).is_ok());
    }

    #[test]
    fn average_of_no_ratings_is_undefined() {
        assert_eq!(AvgRatingBuilder::default().build(), None);
    }

    #[test]
    fn average_rating() {
        let mut builder = AvgRatingBuilder::default();
        builder += RatingValue::try_from(4).unwrap();
        builder += RatingValue::try_from(5).unwrap();
        builder += RatingValue::try_from(3).unwrap();
        assert_eq!(builder.build(), Some(4.0.into()));
    }
}
