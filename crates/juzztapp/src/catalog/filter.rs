use crate::model::Record;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Genres offered by the storefront's filter sidebar. Filtering accepts any
/// genre name; this list only drives what UIs suggest.
pub const KNOWN_GENRES: &[&str] = &[
    "jazz",
    "hard bop",
    "cool jazz",
    "jazz fusion",
    "free jazz",
    "avant-garde jazz",
    "modal jazz",
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

impl GenreFilter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => record.has_genre(genre),
        }
    }
}

impl FromStr for GenreFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(GenreFilter::All)
        } else {
            Ok(GenreFilter::Only(trimmed.to_string()))
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => write!(f, "all"),
            GenreFilter::Only(genre) => write!(f, "{}", genre),
        }
    }
}

/// Inclusive price bounds. An inverted range (`min > max`) matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const DEFAULT_MAX: f64 = 200.0;

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn up_to(max: f64) -> Self {
        Self { min: 0.0, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(Self::DEFAULT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genre_filter() {
        assert_eq!("all".parse::<GenreFilter>().unwrap(), GenreFilter::All);
        assert_eq!("ALL".parse::<GenreFilter>().unwrap(), GenreFilter::All);
        assert_eq!("".parse::<GenreFilter>().unwrap(), GenreFilter::All);
        assert_eq!(
            " hard bop ".parse::<GenreFilter>().unwrap(),
            GenreFilter::Only("hard bop".into())
        );
    }

    #[test]
    fn test_genre_filter_excludes_missing_genre() {
        let filter = GenreFilter::Only("jazz".into());
        assert!(!filter.matches(&Record::new(1, "A", 1.0)));
        assert!(GenreFilter::All.matches(&Record::new(1, "A", 1.0)));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(20.01));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = PriceRange::new(50.0, 10.0);
        assert!(range.is_inverted());
        for price in [0.0, 10.0, 30.0, 50.0, 100.0] {
            assert!(!range.contains(price));
        }
    }
}
