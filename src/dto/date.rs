//! Serde adapter for the CRM's `YYYY-MM-DD` date rendering.
//!
//! Used with `#[serde(with = "crate::dto::date")]` on `Option<NaiveDate>`
//! fields.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%d";

pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value {
        Some(s) if !s.is_empty() => NaiveDate::parse_from_str(&s, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
