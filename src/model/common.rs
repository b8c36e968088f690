use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of a best-effort numeric conversion.
///
/// The upstream API returns some numbers as strings or floats. When a value
/// can be converted it is stored as `Converted`, otherwise the original JSON
/// value is kept untouched as `Raw`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coerced<T> {
    Converted(T),
    Raw(serde_json::Value),
}

impl<T> Coerced<T> {
    pub fn converted(&self) -> Option<&T> {
        match self {
            Coerced::Converted(value) => Some(value),
            Coerced::Raw(_) => None,
        }
    }
}

impl<T: Display> Display for Coerced<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Coerced::Converted(value) => value.fmt(f),
            Coerced::Raw(serde_json::Value::String(s)) => f.write_str(s),
            Coerced::Raw(value) => write!(f, "{value}"),
        }
    }
}

/// Deserialize an explicit JSON `null` as the type's default.
///
/// `#[serde(default)]` only covers missing keys; GraphQL sends `null` for
/// empty lists and absent scalars.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
