//! Serde helper functions for request payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a string, treating `null` as an empty string.
///
/// Pair with `#[serde(default)]` so a missing field is also empty.
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}
