//! Lenient field deserializers
//!
//! The structuring collaborator occasionally emits `null` for a string, a
//! bare number for marks, or `null` holes inside lists. None of these are
//! worth rejecting a whole paper over, so they are folded into the
//! empty-string / empty-list convention here.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize any scalar into its literal text; `null` becomes `""`.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text).unwrap_or_default())
}

/// Deserialize a list of scalars, dropping `null` entries.
///
/// A lone string is accepted as a one-element list.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().filter_map(value_to_text).collect(),
        Some(other) => value_to_text(other).into_iter().collect(),
    })
}

/// Deserialize a list of records; `null` becomes an empty list.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
