use crate::{id::Id, time::Timestamp};

/// Photo attached to a parking-space listing. At most one image per
/// space carries the `primary` flag; it serves as the listing thumbnail.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceImage {
    pub id          : Id,
    pub space       : Id,
    pub url         : String,
    pub primary     : bool,
    pub uploaded_at : Timestamp,
}
