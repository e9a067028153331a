use crate::client::responses::LedgerResponse;
use crate::{AuthSession, CliClientResult, ClientError, CreditAck, RewardsPolicy, WatchGrant};

use aw_core::LedgerRecord;

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP client for the aw-server REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    pub api_key: Option<String>,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `api_key` - Project API key sent as `X-Api-Key` when the server requires one
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with the API key and optional bearer token
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref api_key) = self.api_key {
            req = req.header(API_KEY_HEADER, api_key);
        }
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request, turning non-2xx bodies into `ClientError::Api`
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::error_from_body(status, &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Error bodies come in two shapes: `{"error": "..."}` from the ledger
    /// endpoint and `{"error": {"code", "message"}}` from everything else.
    fn error_from_body(status: StatusCode, bytes: &[u8]) -> ClientError {
        let fallback = status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();

        let body: Option<Value> = serde_json::from_slice(bytes).ok();
        let error = body.as_ref().and_then(|b| b.get("error"));

        let (code, message) = match error {
            Some(Value::String(message)) => ("UNKNOWN".to_string(), message.clone()),
            Some(obj @ Value::Object(_)) => (
                obj.get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string(),
                obj.get("message")
                    .and_then(|v| v.as_str())
                    .map(String::from)
                    .unwrap_or(fallback),
            ),
            _ => ("UNKNOWN".to_string(), fallback),
        };

        ClientError::api_error(status.as_u16(), code, message)
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub async fn sign_up(&self, email: &str, password: &str) -> CliClientResult<AuthSession> {
        let req = self
            .request(Method::POST, "/api/v1/auth/signup", None)
            .json(&Credentials { email, password });
        self.execute(req).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> CliClientResult<AuthSession> {
        let req = self
            .request(Method::POST, "/api/v1/auth/login", None)
            .json(&Credentials { email, password });
        self.execute(req).await
    }

    // =========================================================================
    // Ledger
    // =========================================================================

    pub async fn get_ledger(&self, uid: &str, token: &str) -> CliClientResult<LedgerRecord> {
        let req = self.request(Method::GET, &format!("/api/v1/ledger/{}", uid), Some(token));
        let response: LedgerResponse = self.execute(req).await?;
        Ok(response.ledger)
    }

    /// Credit `points` to `uid`. `ticket` and `token` are only needed when
    /// the server runs in verified credit mode.
    pub async fn add_points(
        &self,
        uid: &str,
        points: i64,
        ticket: Option<&str>,
        token: Option<&str>,
    ) -> CliClientResult<CreditAck> {
        #[derive(Serialize)]
        struct AddPointsRequest<'a> {
            uid: &'a str,
            points: i64,
            #[serde(skip_serializing_if = "Option::is_none")]
            ticket: Option<&'a str>,
        }

        let req = self
            .request(Method::POST, "/api/addPoints", token)
            .json(&AddPointsRequest {
                uid,
                points,
                ticket,
            });
        self.execute(req).await
    }

    // =========================================================================
    // Rewards
    // =========================================================================

    pub async fn start_watch(&self, token: &str) -> CliClientResult<WatchGrant> {
        let req = self.request(Method::POST, "/api/v1/watch/start", Some(token));
        self.execute(req).await
    }

    pub async fn rewards_policy(&self) -> CliClientResult<RewardsPolicy> {
        let req = self.request(Method::GET, "/api/v1/rewards", None);
        self.execute(req).await
    }
}
