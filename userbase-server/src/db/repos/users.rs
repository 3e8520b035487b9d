//! User repository backed by PostgreSQL
//!
//! One parameterized statement per operation:
//! - find_all: SELECT, rows in store order
//! - find_one: SELECT ... WHERE id = $1, absent row is `None`
//! - delete_all: unconditional DELETE
//! - save: INSERT, conflicts surface as driver errors; saves are serialized
//!   on an advisory lock so generated and client ids cannot race

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::db::store::{StoreError, UserStore};
use crate::models::User;

/// DDL for the users table.
///
/// Ids are generated by default but clients may still supply their own.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    firstname TEXT NOT NULL,
    lastname TEXT NOT NULL
)
"#;

/// Advisory lock key serializing inserts against the id generator.
const USER_ID_LOCK: i64 = 0x7573_6572;

/// User repository
#[derive(Clone)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Move the id generator up to the highest stored id so generated ids never
/// collide with client-supplied ones. Never moves it backwards.
async fn advance_id_sequence(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        SELECT setval(pg_get_serial_sequence('users', 'id'), MAX(id))
        FROM users
        HAVING MAX(id) > COALESCE(
            pg_sequence_last_value(pg_get_serial_sequence('users', 'id')::regclass),
            0
        )
        "#,
    )
    .execute(conn)
    .await?;
    Ok(())
}

#[async_trait]
impl UserStore for PgUserRepo {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query("SELECT id, firstname, lastname FROM users")
            .fetch_all(&self.pool)
            .await?;

        let users = rows
            .iter()
            .map(User::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    async fn find_one(&self, id: i32) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT id, firstname, lastname FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(User::from_row).transpose()?)
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        Ok(())
    }

    async fn save(&self, user: User) -> Result<(), StoreError> {
        // The lock is released on commit or rollback, so an explicit-id insert
        // and the sequence advance are never interleaved with another save.
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(USER_ID_LOCK)
            .execute(&mut *tx)
            .await?;

        match user.id {
            Some(id) => {
                sqlx::query("INSERT INTO users (id, firstname, lastname) VALUES ($1, $2, $3)")
                    .bind(id)
                    .bind(&user.firstname)
                    .bind(&user.lastname)
                    .execute(&mut *tx)
                    .await?;
                advance_id_sequence(&mut *tx).await?;
            }
            None => {
                sqlx::query("INSERT INTO users (firstname, lastname) VALUES ($1, $2)")
                    .bind(&user.firstname)
                    .bind(&user.lastname)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn create_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}
