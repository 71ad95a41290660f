//! # Domain Model: Records and Cart Entries
//!
//! The catalog API hands out loosely-shaped JSON: fields may be missing, `null`,
//! or use one of two names for the same thing (`releaseDate` vs `createdAt`).
//! Rather than sprinkling fallbacks at every call site, [`Record`] absorbs that
//! looseness once, at deserialization time:
//!
//! | Field        | Wire name      | When absent / `null`                       |
//! |--------------|----------------|--------------------------------------------|
//! | `id`         | `id`           | required                                   |
//! | `title`      | `title`        | empty string                               |
//! | `artist`     | `artist`       | `None`, displayed as [`UNKNOWN_ARTIST`]    |
//! | `price`      | `price`        | `0.0`                                      |
//! | `genre`      | `genre`        | `None` (excluded by any genre filter)      |
//! | `image_url`  | `imageUrl`     | `None`                                     |
//! | timestamps   | `releaseDate`, `createdAt` | `None` (sorts as oldest)       |
//!
//! Timestamps accept RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`, a bare
//! `YYYY-MM-DD`, or epoch milliseconds. Anything else is treated as absent.
//!
//! A [`CartEntry`] is a record plus a quantity. It serializes flat
//! (`{"id": 1, "title": "...", "quantity": 2}`), which is the layout persisted
//! under the `cart` storage key.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the catalog backend.
pub type RecordId = i64;

/// Display name used when a record carries no artist.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub musicbrainz_id: Option<String>,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record {
    pub fn new(id: RecordId, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            artist: None,
            price,
            genre: None,
            image_url: None,
            musicbrainz_id: None,
            release_date: None,
            created_at: None,
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_release_date(mut self, date: DateTime<Utc>) -> Self {
        self.release_date = Some(date);
        self
    }

    /// The artist, or [`UNKNOWN_ARTIST`] when the catalog left it out.
    pub fn artist_or_default(&self) -> &str {
        match self.artist.as_deref() {
            Some(artist) if !artist.trim().is_empty() => artist,
            _ => UNKNOWN_ARTIST,
        }
    }

    /// Timestamp used for "newest" ordering. `releaseDate` wins over `createdAt`.
    pub fn released_at(&self) -> Option<DateTime<Utc>> {
        self.release_date.or(self.created_at)
    }

    /// Genre match after [`normalize_genre`]. Records without a genre never match.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre
            .as_deref()
            .is_some_and(|own| normalize_genre(own) == normalize_genre(genre))
    }
}

/// Canonical form used wherever genres are compared or counted.
pub fn normalize_genre(genre: &str) -> String {
    genre.trim().to_lowercase()
}

/// A record in the cart, annotated with how many copies the user wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(flatten)]
    pub record: Record,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            quantity: 1,
        }
    }

    pub fn id(&self) -> RecordId {
        self.record.id
    }

    pub fn subtotal(&self) -> f64 {
        self.record.price * f64::from(self.quantity)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses the timestamp shapes the catalog API has been seen to emit.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

mod timestamp {
    use super::parse_timestamp;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(s)) => parse_timestamp(&s),
            Some(Value::Number(n)) => n.as_i64().and_then(DateTime::from_timestamp_millis),
            _ => None,
        })
    }
}
