//! One row of the funded-campaigns dataset.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A dataset row. Every field is kept as display text, nothing is parsed as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "s.no", default, deserialize_with = "display_value")]
    pub serial: String,
    #[serde(rename = "percentage.funded", default, deserialize_with = "display_value")]
    pub percentage_funded: String,
    #[serde(rename = "amt.pledged", default, deserialize_with = "display_value")]
    pub amount_pledged: String,
}

impl Record {
    pub fn new(
        serial: impl Into<String>,
        percentage_funded: impl Into<String>,
        amount_pledged: impl Into<String>,
    ) -> Self {
        Self {
            serial: serial.into(),
            percentage_funded: percentage_funded.into(),
            amount_pledged: amount_pledged.into(),
        }
    }
}

/// Strings verbatim, `null` as an empty cell, anything else as its JSON text.
fn display_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}
