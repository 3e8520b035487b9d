//! User entity - one row of the `users` table

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

/// A user row.
///
/// `id` is `None` until the store assigns one, unless the client supplies it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i32>,
    pub firstname: String,
    pub lastname: String,
}

impl User {
    pub fn new(id: Option<i32>, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    /// A user without an id, to be assigned by the store on save.
    pub fn unsaved(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self::new(None, firstname, lastname)
    }

    /// Map a `users` row by column name.
    pub fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            firstname: row.try_get("firstname")?,
            lastname: row.try_get("lastname")?,
        })
    }
}

/// Rows written by `init()` after clearing the table.
pub fn seed_users() -> [User; 3] {
    [
        User::new(Some(1), "dffgfgfgf", "gfgdfgd"),
        User::new(Some(2), "fdfdfdfdf", "ytyrtyrt"),
        User::new(Some(3), "dfgdgdfgd", "gdfgdfgd"),
    ]
}
