//! Watch ticket repository.
//!
//! Redemption claims the ticket first (conditional `UPDATE` on
//! `consumed_at IS NULL`), then validates it, then credits the ledger, all
//! inside one transaction. Taking the write lock up front keeps two
//! concurrent redemptions of the same ticket from both passing the checks;
//! any failed check rolls the claim back.
//!
//! Expired rows are swept by `delete_expired()`, and `create_capped()` bounds
//! how many open tickets a single user can hold.

use crate::repositories::from_timestamp_millis;
use crate::{DbError, LedgerRepository, Result as DbErrorResult};

use aw_core::{LedgerRecord, PointsDelta, TicketRejection, WatchTicket};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct WatchTicketRow {
    id: String,
    uid: String,
    points: i64,
    issued_at: i64,
    ready_at: i64,
    expires_at: i64,
    consumed_at: Option<i64>,
}

impl TryFrom<WatchTicketRow> for WatchTicket {
    type Error = DbError;

    fn try_from(row: WatchTicketRow) -> DbErrorResult<Self> {
        Ok(WatchTicket {
            id: Uuid::parse_str(&row.id).map_err(|e| {
                DbError::initialization(format!("Invalid UUID in watch_tickets.id: {}", e))
            })?,
            uid: row.uid,
            points: row.points,
            issued_at: from_timestamp_millis(row.issued_at, "watch_tickets.issued_at")?,
            ready_at: from_timestamp_millis(row.ready_at, "watch_tickets.ready_at")?,
            expires_at: from_timestamp_millis(row.expires_at, "watch_tickets.expires_at")?,
            consumed_at: row
                .consumed_at
                .map(|ts| from_timestamp_millis(ts, "watch_tickets.consumed_at"))
                .transpose()?,
        })
    }
}

pub struct WatchTicketRepository {
    pool: SqlitePool,
}

impl WatchTicketRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, ticket: &WatchTicket) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO watch_tickets (
                    id, uid, points, issued_at, ready_at, expires_at, consumed_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(ticket.id.to_string())
        .bind(&ticket.uid)
        .bind(ticket.points)
        .bind(ticket.issued_at.timestamp_millis())
        .bind(ticket.ready_at.timestamp_millis())
        .bind(ticket.expires_at.timestamp_millis())
        .bind(ticket.consumed_at.map(|dt| dt.timestamp_millis()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert `ticket` unless its owner already holds `max_open` unused,
    /// unexpired tickets, judged at `ticket.issued_at`. The count and the
    /// insert are one statement.
    pub async fn create_capped(&self, ticket: &WatchTicket, max_open: u32) -> DbErrorResult<()> {
        let issued_at = ticket.issued_at.timestamp_millis();

        let result = sqlx::query(
            r#"
                INSERT INTO watch_tickets (
                    id, uid, points, issued_at, ready_at, expires_at, consumed_at
                )
                SELECT ?, ?, ?, ?, ?, ?, ?
                WHERE (
                    SELECT COUNT(*) FROM watch_tickets
                    WHERE uid = ? AND consumed_at IS NULL AND expires_at > ?
                ) < ?
            "#,
        )
        .bind(ticket.id.to_string())
        .bind(&ticket.uid)
        .bind(ticket.points)
        .bind(issued_at)
        .bind(ticket.ready_at.timestamp_millis())
        .bind(ticket.expires_at.timestamp_millis())
        .bind(ticket.consumed_at.map(|dt| dt.timestamp_millis()))
        .bind(&ticket.uid)
        .bind(issued_at)
        .bind(max_open)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::Conflict {
                message: format!(
                    "Too many open watch tickets for {}",
                    LedgerRecord::path(&ticket.uid)
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Delete every ticket whose redemption window closed at or before `now`,
    /// consumed or not. Returns the number of rows removed.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM watch_tickets WHERE expires_at <= ?")
            .bind(now.timestamp_millis())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<WatchTicket>> {
        let mut conn = self.pool.acquire().await?;
        Self::find_with(&mut conn, id).await
    }

    /// Consume the ticket and credit `delta` to `uid`'s ledger atomically.
    pub async fn redeem(
        &self,
        id: Uuid,
        uid: &str,
        delta: PointsDelta,
        now: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query(
            "UPDATE watch_tickets SET consumed_at = ? WHERE id = ? AND consumed_at IS NULL",
        )
        .bind(now.timestamp_millis())
        .bind(id.to_string())
        .execute(&mut *tx)
        .await?;

        let Some(mut ticket) = Self::find_with(&mut tx, id).await? else {
            return Err(DbError::ticket_rejected(TicketRejection::Unknown));
        };

        if claimed.rows_affected() == 0 {
            return Err(DbError::ticket_rejected(TicketRejection::AlreadyConsumed));
        }

        // Judge the ticket as it was before this claim
        ticket.consumed_at = None;
        ticket
            .check_redeemable(uid, delta.get(), now)
            .map_err(DbError::ticket_rejected)?;

        LedgerRepository::increment_with(&mut tx, uid, delta).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_with(conn: &mut SqliteConnection, id: Uuid) -> DbErrorResult<Option<WatchTicket>> {
        let row = sqlx::query_as::<_, WatchTicketRow>(
            r#"
                SELECT id, uid, points, issued_at, ready_at, expires_at, consumed_at
                FROM watch_tickets
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&mut *conn)
        .await?;

        row.map(WatchTicket::try_from).transpose()
    }
}
