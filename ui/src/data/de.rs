//! Lenient numeric decoding: the API serialises some decimals as strings.

use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    fn into_f64(self) -> Result<Option<f64>, String> {
        match self {
            Self::Number(value) => Ok(Some(value)),
            Self::Text(text) if text.trim().is_empty() => Ok(None),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| format!("`{text}` is not a number")),
        }
    }
}

pub(crate) fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Numeric::deserialize(deserializer)?
        .into_f64()
        .map_err(D::Error::custom)?
        .ok_or_else(|| D::Error::custom("expected a number, found an empty string"))
}

pub(crate) fn optional_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    match Option::<Numeric>::deserialize(deserializer)? {
        Some(value) => value.into_f64().map_err(D::Error::custom),
        None => Ok(None),
    }
}

pub(crate) fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    to_u32(number(deserializer)?).map_err(D::Error::custom)
}

pub(crate) fn optional_integer<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u32>, D::Error> {
    optional_number(deserializer)?
        .map(to_u32)
        .transpose()
        .map_err(D::Error::custom)
}

fn to_u32(value: f64) -> Result<u32, String> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(format!("{value} is not a non-negative integer"))
    }
}
