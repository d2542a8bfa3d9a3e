use smartpark_entities::space::SpaceFields;
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum SpaceInvalidation {
    #[error("Invalid price")]
    Price,
}

impl Validate for SpaceFields {
    type Error = SpaceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        // NOTE:
        // The availability window and coordinates are always valid
        // because the validation is done in their constructors.
        if !self.price_per_hour.is_finite() || self.price_per_hour <= 0.0 {
            return Err(Self::Error::Price);
        }
        Ok(())
    }
}
