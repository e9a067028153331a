//! Ledger repository - the `users` collection of the document store.
//!
//! ## Increments
//!
//! `increment_points()` is a single `UPDATE ... SET points = points + ?`
//! statement. SQLite serializes writers, so concurrent increments on the
//! same record commute and none is lost. Never replace it with a
//! read-modify-write pair.
//!
//! Incrementing a record that does not exist fails with
//! `DbError::RecordNotFound` and creates nothing.
//!
//! The `WHERE` clause also refuses any increment that would carry `points`
//! past `i64::MAX`. SQLite would otherwise promote the sum to REAL. Such a
//! refusal surfaces as `DbError::Overflow` and leaves the record untouched.

use crate::repositories::from_timestamp;
use crate::{DbError, Result as DbErrorResult};

use aw_core::{LedgerRecord, PointsDelta};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

#[derive(FromRow)]
struct LedgerRow {
    uid: String,
    email: String,
    points: i64,
    created_at: i64,
}

impl TryFrom<LedgerRow> for LedgerRecord {
    type Error = DbError;

    fn try_from(row: LedgerRow) -> DbErrorResult<Self> {
        Ok(LedgerRecord {
            uid: row.uid,
            email: row.email,
            points: row.points,
            created_at: from_timestamp(row.created_at, "users.created_at")?,
        })
    }
}

pub struct LedgerRepository {
    pool: SqlitePool,
}

impl LedgerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &LedgerRecord) -> DbErrorResult<()> {
        let mut conn = self.pool.acquire().await?;
        Self::create_with(&mut conn, record).await
    }

    pub async fn find_by_uid(&self, uid: &str) -> DbErrorResult<Option<LedgerRecord>> {
        let row = sqlx::query_as::<_, LedgerRow>(
            r#"
                SELECT uid, email, points, created_at
                FROM users
                WHERE uid = ?
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        row.map(LedgerRecord::try_from).transpose()
    }

    /// Atomically add `delta` to the record's `points`.
    pub async fn increment_points(&self, uid: &str, delta: PointsDelta) -> DbErrorResult<()> {
        let mut conn = self.pool.acquire().await?;
        Self::increment_with(&mut conn, uid, delta).await
    }

    pub(crate) async fn create_with(
        conn: &mut SqliteConnection,
        record: &LedgerRecord,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (uid, email, points, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.uid)
        .bind(&record.email)
        .bind(record.points)
        .bind(record.created_at.timestamp())
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    pub(crate) async fn increment_with(
        conn: &mut SqliteConnection,
        uid: &str,
        delta: PointsDelta,
    ) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET points = points + ?
                WHERE uid = ? AND points <= 9223372036854775807 - ?
            "#,
        )
        .bind(delta.get())
        .bind(uid)
        .bind(delta.get())
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Zero rows: either no record or the guard refused the sum
        let exists = sqlx::query("SELECT 1 FROM users WHERE uid = ?")
            .bind(uid)
            .fetch_optional(&mut *conn)
            .await?
            .is_some();

        let path = LedgerRecord::path(uid);
        let location = ErrorLocation::from(Location::caller());
        if exists {
            Err(DbError::Overflow { path, location })
        } else {
            Err(DbError::RecordNotFound { path, location })
        }
    }
}
