use crate::model::Record;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "priceAsc",
            SortKey::PriceDesc => "priceDesc",
            SortKey::TitleAsc => "titleAsc",
            SortKey::TitleDesc => "titleDesc",
        }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            // None < Some, so reversing puts undated records last
            SortKey::Newest => b.released_at().cmp(&a.released_at()),
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::TitleAsc => locale_cmp(&a.title, &b.title),
            SortKey::TitleDesc => locale_cmp(&b.title, &a.title),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    /// Accepts the wire names (`priceAsc`) case-insensitively, with or without
    /// a dash (`price-asc`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().to_lowercase() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = SortKey::ALL.iter().map(SortKey::as_str).collect();
                format!("Unknown sort '{}'. Expected one of: {}", s, valid.join(", "))
            })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable in-place sort. Ties keep their incoming relative order.
pub fn sort_records(records: &mut [Record], key: SortKey) {
    records.sort_by(|a, b| key.compare(a, b));
}

/// Human-oriented string ordering.
///
/// Compares on base letters first (accents stripped, case folded), so
/// "émile" sits next to "Emile" rather than after "zoot". Within that key,
/// spaces and punctuation sort before digits and digits before letters.
/// Remaining ties are broken with lowercase before uppercase, then by code
/// point.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> Vec<(u8, char)> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
        .collect()
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

fn case_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}
