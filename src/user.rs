//! User records and their serialization-safe projection.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// User record as stored by the account backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub hashed_password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub favorite_ids: Vec<String>,
}

/// [`User`] with its timestamps rendered as RFC 3339 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<String>,
    pub image: Option<String>,
    pub hashed_password: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub favorite_ids: Vec<String>,
}

fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<User> for SafeUser {
    fn from(user: User) -> Self {
        Self {
            created_at: timestamp(&user.created_at),
            updated_at: timestamp(&user.updated_at),
            email_verified: user.email_verified.as_ref().map(timestamp),
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            hashed_password: user.hashed_password,
            favorite_ids: user.favorite_ids,
        }
    }
}

impl From<&User> for SafeUser {
    fn from(user: &User) -> Self {
        SafeUser::from(user.clone())
    }
}
