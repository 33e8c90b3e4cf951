use crate::{repositories, util::sort::SortOrderParseError};
use lunchkompis_entities::{price::PriceRangeParseError, rating::RatingParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Rating value out of range")]
    Rating,
    #[error("Invalid price range: {0}")]
    PriceRange(#[from] PriceRangeParseError),
    #[error(transparent)]
    SortOrder(#[from] SortOrderParseError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<RatingParseError> for Error {
    fn from(_: RatingParseError) -> Self {
        Self::Rating
    }
}
