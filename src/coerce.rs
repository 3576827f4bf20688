//! Lenient numeric decoding.
//!
//! The aggregate producer writes ranks and counts as floats (`1.0`), and the
//! add-entry form posts numbers as text. These helpers accept both shapes.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Integral count or rank written either as `3` or `3.0`.
pub fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!("expected a whole number, got {value}")));
    }
    Ok(value as u32)
}

/// Required number given as a JSON number or numeric text.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match optional_number(deserializer)? {
        Some(value) => Ok(value),
        None => Err(de::Error::custom("a number is required")),
    }
}

/// Optional number; `null`, a missing field or blank text all mean absent.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| de::Error::custom("number out of range")),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("'{text}' is not a number")))
        }
        other => Err(de::Error::custom(format!("expected a number, got {other}"))),
    }
}
