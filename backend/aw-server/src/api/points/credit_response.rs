use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreditResponse {
    pub success: bool,
}
