//! # Data Model
//!
//! A [`Listing`] is the only persisted entity. The whole collection lives in a
//! single JSON document, ordered by insertion with the newest listing first.
//!
//! Stored documents are tolerated loosely and normalized once on read:
//! - `id` may be a number or a numeric string (coerced like an integer parse)
//! - `year`, `mileage` and `fuel` may be numbers or text; empty text is absent
//! - a missing `image` becomes [`PLACEHOLDER_IMAGE`], a missing `featured` is false
//!
//! Everything past deserialization works with the typed record only.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{CarlotError, Result};

pub type ListingId = i64;

/// Image shown for listings submitted without one.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=No+Image";

/// Name of the query parameter the details link carries.
pub const DETAILS_ID_PARAM: &str = "id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: ListingId,
    pub name: String,
    pub price: f64,
    pub location: String,
    pub description: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub mileage: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fuel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Builds a stored record from user input. User listings are never featured.
    pub fn from_new(new: NewListing, id: ListingId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            price: new.price,
            location: new.location,
            description: new.description,
            image: new.image,
            featured: false,
            year: new.year,
            mileage: new.mileage,
            fuel: new.fuel,
            created_at: Some(created_at),
        }
    }

    /// Relative link to this listing's details view.
    pub fn details_link(&self) -> String {
        format!("details.html?{}={}", DETAILS_ID_PARAM, self.id)
    }
}

/// A listing as submitted, before the store assigns identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub name: String,
    pub price: f64,
    pub location: String,
    pub description: String,
    pub image: String,
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub fuel: Option<String>,
}

/// Simulated login state. There is no credential check behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub logged_in: bool,
    pub email: Option<String>,
}

impl Session {
    pub fn logged_in_as(email: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            email: Some(email.into()),
        }
    }
}

/// Resolves a listing reference to an id.
///
/// Accepts a bare id (`"42"`) or anything carrying an `id` query parameter
/// (`"details.html?id=42"`, `"?id=42"`). The value is coerced the way an
/// integer parse does: leading digits count, trailing garbage is ignored.
pub fn parse_listing_id(raw: &str) -> Result<ListingId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CarlotError::MissingId);
    }

    let value = match raw.split_once('?') {
        Some((_, query)) => url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == DETAILS_ID_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.trim().is_empty())
            .ok_or(CarlotError::MissingId)?,
        None => raw.to_string(),
    };

    coerce_int(&value).ok_or(CarlotError::InvalidId(value))
}

fn coerce_int(raw: &str) -> Option<ListingId> {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let n: ListingId = digits[..end].parse().ok()?;
    Some(if negative { -n } else { n })
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(serde_json::Number),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<ListingId, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::deserialize(deserializer)? {
        Loose::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as ListingId))
            .ok_or_else(|| invalid_id(&n)),
        Loose::Text(s) => coerce_int(&s).ok_or_else(|| invalid_id(&s)),
    }
}

fn invalid_id<E: de::Error>(raw: &dyn std::fmt::Display) -> E {
    E::custom(format!("invalid listing id: {}", raw))
}

fn deserialize_optional_text<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => None,
        Some(Loose::Number(n)) => Some(n.to_string()),
        Some(Loose::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    })
}
