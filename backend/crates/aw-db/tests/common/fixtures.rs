use aw_core::{Email, Identity, LedgerRecord, WatchTicket};

use chrono::{DateTime, TimeDelta, Utc};
use sqlx::SqlitePool;

/// Creates a test Identity (not yet persisted)
pub fn create_test_identity(email: &str) -> Identity {
    Identity::new(
        Email::parse(email).expect("valid test email"),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    )
}

/// Inserts a bare ledger record for `uid`
pub async fn create_test_ledger(pool: &SqlitePool, uid: &str) -> LedgerRecord {
    let record = LedgerRecord::new(uid.to_string(), format!("{}@example.com", uid));
    aw_db::LedgerRepository::new(pool.clone())
        .create(&record)
        .await
        .expect("Failed to create test ledger");
    record
}

/// Creates a 10-point ticket with a 10s watch and 5 minute lifetime
pub fn create_test_ticket(uid: &str, now: DateTime<Utc>) -> WatchTicket {
    WatchTicket::issue(
        uid.to_string(),
        10,
        TimeDelta::seconds(10),
        TimeDelta::seconds(300),
        now,
    )
}
