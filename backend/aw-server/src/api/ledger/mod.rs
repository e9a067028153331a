pub mod ledger;
pub mod ledger_dto;
pub mod ledger_response;
