//! Custom serde helpers for the road status API payloads.
//!
//! The API is not strict about property casing (`displayName`,
//! `DisplayName` and `displayname` must all be accepted), which serde has no
//! switch for. Bodies are therefore parsed into a [`Value`] first, every object
//! key is folded to lowercase, and only then deserialized into the target type.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Deserializes a JSON body, matching object properties case-insensitively.
///
/// The target type must use lowercase serde names. A JSON `null` body yields
/// `None`, mirroring an API that answered with nothing usable.
///
/// # Examples
/// ```text
/// Input:  [{"DisplayName":"A2"}]
/// Folded: [{"displayname":"A2"}]
/// ```
///
/// # Errors
/// Returns the underlying [`serde_json::Error`] if the body is not JSON or does
/// not fit `T`.
pub fn from_str_case_insensitive<T>(body: &str) -> Result<Option<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Ok(None);
    }

    serde_json::from_value(fold_keys(value)).map(Some)
}

/// Recursively lowercases every object key. When two keys collide after
/// folding, the value appearing last in the document wins (object order is
/// preserved through `serde_json`'s `preserve_order` feature).
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut folded = Map::with_capacity(map.len());
            for (key, value) in map {
                folded.insert(key.to_lowercase(), fold_keys(value));
            }
            Value::Object(folded)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// Deserializes a string that may be `null` into an empty string.
///
/// Used together with `#[serde(default)]`, so an explicit `null` and an absent
/// property both end up as `""`.
///
/// # Examples
/// ```text
/// Input:  null
/// Output: ""
/// ```
pub fn null_as_empty<'a, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'a>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
