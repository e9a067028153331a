//! Identity repository - account credentials.
//!
//! `register()` writes the identity and its empty ledger record in one
//! transaction, so an account never exists without a ledger.

use crate::repositories::from_timestamp;
use crate::{DbError, LedgerRepository, Result as DbErrorResult};

use aw_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct IdentityRow {
    uid: String,
    email: String,
    password_hash: String,
    created_at: i64,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = DbError;

    fn try_from(row: IdentityRow) -> DbErrorResult<Self> {
        Ok(Identity {
            uid: row.uid,
            email: row.email,
            password_hash: row.password_hash,
            created_at: from_timestamp(row.created_at, "identities.created_at")?,
        })
    }
}

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the identity and its ledger record (`points = 0`).
    ///
    /// Returns `DbError::Conflict` when the email is already registered.
    pub async fn register(&self, identity: &Identity) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
                INSERT INTO identities (uid, email, password_hash, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&identity.uid)
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(identity.created_at.timestamp())
        .execute(&mut *tx)
        .await;

        match inserted {
            Ok(_) => {}
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(DbError::Conflict {
                    message: format!("Email {} is already registered", identity.email),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        LedgerRepository::create_with(&mut tx, &identity.ledger_record()).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
                SELECT uid, email, password_hash, created_at
                FROM identities
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }

    pub async fn find_by_uid(&self, uid: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
                SELECT uid, email, password_hash, created_at
                FROM identities
                WHERE uid = ?
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }
}
