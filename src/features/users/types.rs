//! Wire types for the `/users` resource.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned identifier. The backend may use numeric or string ids; the
/// original JSON shape is kept so updates echo it back unchanged. Numbers are
/// held as `serde_json::Number`, so floats and ids past `i64` survive too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(value) => write!(formatter, "{value}"),
            UserId::Text(value) => formatter.write_str(value),
        }
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId::Number(value.into())
    }
}

/// A user record as listed by the server and as edited in the form.
///
/// `edad` is the raw text of the age input. It is sent as-is, so the wire value
/// is whatever the input holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub nombre: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub edad: String,
}

/// Collection path.
pub const USERS_PATH: &str = "/users";

/// Item path for `id`.
pub fn user_path(id: &UserId) -> String {
    format!("{USERS_PATH}/{id}")
}

/// Partial records come back with `null` text fields; they render as blanks.
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON string, number or null and keeps the textual form.
fn deserialize_loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(value)) => value,
        Some(Loose::Number(value)) => value.to_string(),
        None => String::new(),
    })
}
