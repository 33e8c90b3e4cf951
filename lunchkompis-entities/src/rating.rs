use std::{fmt, str::FromStr};

use thiserror::Error;

/// The average rating of a restaurant on a scale of zero to five stars.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid rating value")]
pub struct RatingParseError;

impl Rating {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// Number of filled stars when rendering the rating.
    pub fn rounded_stars(self) -> u8 {
        self.clamp().0.round() as u8
    }
}

impl From<f64> for Rating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<Rating> for f64 {
    fn from(from: Rating) -> Self {
        from.0
    }
}

impl FromStr for Rating {
    type Err = RatingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rating = s
            .trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| RatingParseError)?;
        if !rating.is_valid() {
            return Err(RatingParseError);
        }
        Ok(rating)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        assert!(Rating::from(0.0).is_valid());
        assert!(Rating::from(5.0).is_valid());
        assert!(!Rating::from(5.1).is_valid());
        assert!(!Rating::from(-0.1).is_valid());
        assert!(!Rating::from(f64::NAN).is_valid());
    }

    #[test]
    fn clamp_into_range() {
        assert_eq!(Rating::from(7.0).clamp(), Rating::max());
        assert_eq!(Rating::from(-1.0).clamp(), Rating::min());
        assert_eq!(Rating::from(4.2).clamp(), Rating::from(4.2));
    }

    #[test]
    fn parse_rating() {
        assert_eq!("4.3".parse(), Ok(Rating::from(4.3)));
        assert_eq!(" 4 ".parse(), Ok(Rating::from(4.0)));
        assert_eq!("6".parse::<Rating>(), Err(RatingParseError));
        assert_eq!("four".parse::<Rating>(), Err(RatingParseError));
    }

    #[test]
    fn display_with_one_decimal() {
        assert_eq!(Rating::from(4.0).to_string(), "4.0");
        assert_eq!(Rating::from(3.85).rounded_stars(), 4);
    }
}
