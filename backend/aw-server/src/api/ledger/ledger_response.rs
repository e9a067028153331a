use crate::LedgerDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LedgerResponse {
    pub ledger: LedgerDto,
}
