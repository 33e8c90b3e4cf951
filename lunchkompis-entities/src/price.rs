use std::{fmt, str::FromStr};

use thiserror::Error;

/// A non-negative price in Swedish kronor.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<f64> for Price {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<u32> for Price {
    fn from(from: u32) -> Self {
        Self(f64::from(from))
    }
}

impl From<Price> for f64 {
    fn from(from: Price) -> Self {
        from.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0} kr", self.0)
        } else {
            write!(f, "{:.2} kr", self.0)
        }
    }
}

/// An inclusive price interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceRangeParseError {
    #[error("Expected a price range formatted as MIN..MAX")]
    Format,
    #[error("Invalid price")]
    Price,
    #[error("The lower bound exceeds the upper bound")]
    Bounds,
}

impl PriceRange {
    pub fn new(min: Price, max: Price) -> Result<Self, PriceRangeParseError> {
        if !min.is_valid() || !max.is_valid() {
            return Err(PriceRangeParseError::Price);
        }
        if min > max {
            return Err(PriceRangeParseError::Bounds);
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, price: Price) -> bool {
        price >= self.min && price <= self.max
    }
}

impl FromStr for PriceRange {
    type Err = PriceRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s.split_once("..").ok_or(PriceRangeParseError::Format)?;
        let parse = |p: &str| {
            p.trim()
                .parse::<f64>()
                .map(Price)
                .map_err(|_| PriceRangeParseError::Price)
        };
        Self::new(parse(min)?, parse(max)?)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_bounds() {
        let range = PriceRange::new(100u32.into(), 150u32.into()).unwrap();
        assert!(range.contains(100u32.into()));
        assert!(range.contains(119u32.into()));
        assert!(range.contains(150u32.into()));
        assert!(!range.contains(99u32.into()));
        assert!(!range.contains(180u32.into()));
    }

    #[test]
    fn parse_price_range() {
        assert_eq!(
            "100..150".parse(),
            PriceRange::new(100u32.into(), 150u32.into())
        );
        assert_eq!(
            "150..100".parse::<PriceRange>(),
            Err(PriceRangeParseError::Bounds)
        );
        assert_eq!(
            "-5..100".parse::<PriceRange>(),
            Err(PriceRangeParseError::Price)
        );
        assert_eq!(
            "100-150".parse::<PriceRange>(),
            Err(PriceRangeParseError::Format)
        );
    }

    #[test]
    fn display_whole_kronor() {
        assert_eq!(Price::from(165u32).to_string(), "165 kr");
        assert_eq!(Price::from(99.5).to_string(), "99.50 kr");
    }
}
