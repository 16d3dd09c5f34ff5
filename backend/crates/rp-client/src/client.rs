use crate::{ClientError, ClientResult};

use rp_core::{Ack, ModerationAuthority, RawUserRecord, Result as CoreErrorResult};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

const USERS_PATH: &str = "/auth/admin";
const VERIFY_PATH: &str = "/auth/admin/verify";
const REJECT_PATH: &str = "/auth/admin/reject";

const INVALID_FORMAT_MESSAGE: &str = "Invalid data format received from the server";

/// HTTP client for the registration backend's admin endpoints
pub struct AdminClient {
    pub base_url: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModerationRequest {
    user_id: i64,
}

impl AdminClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:4000")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => value,
                Err(e) if status.is_success() => return Err(ClientError::from_json(e)),
                Err(_) => Value::String(text),
            }
        };

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body, status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    /// List every registered user
    pub async fn list_users(&self) -> ClientResult<Vec<RawUserRecord>> {
        let req = self.request(Method::GET, USERS_PATH);
        let body = self.execute(req).await?;

        let users = match body {
            Value::Object(mut map) => map.remove("users"),
            _ => None,
        };

        match users {
            Some(users @ Value::Array(_)) => {
                let records: Vec<RawUserRecord> = serde_json::from_value(users)?;
                debug!("Fetched {} user records", records.len());
                Ok(records)
            }
            _ => Err(ClientError::invalid_format(INVALID_FORMAT_MESSAGE)),
        }
    }

    /// Record a verification decision
    pub async fn verify_user(&self, user_id: i64) -> ClientResult<Ack> {
        self.post_decision(VERIFY_PATH, user_id).await
    }

    /// Record a rejection decision
    pub async fn reject_user(&self, user_id: i64) -> ClientResult<Ack> {
        self.post_decision(REJECT_PATH, user_id).await
    }

    async fn post_decision(&self, path: &str, user_id: i64) -> ClientResult<Ack> {
        let req = self
            .request(Method::POST, path)
            .json(&ModerationRequest { user_id });
        let body = self.execute(req).await?;

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(String::from);

        if let Some(ref message) = message {
            info!("{} (user {}): {}", path, user_id, message);
        }

        Ok(Ack::new(message))
    }
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &Value, status: StatusCode) -> String {
    let from_body = match body {
        Value::String(text) => Some(text.clone()),
        Value::Object(_) => body
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| body.get("error").and_then(Value::as_str))
            .or_else(|| {
                body.get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(Value::as_str)
            })
            .map(String::from),
        _ => None,
    };

    from_body.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    })
}

#[async_trait]
impl ModerationAuthority for AdminClient {
    async fn load_all_records(&self) -> CoreErrorResult<Vec<RawUserRecord>> {
        Ok(self.list_users().await?)
    }

    async fn confirm_verification(&self, id: i64) -> CoreErrorResult<Ack> {
        Ok(self.verify_user(id).await?)
    }

    async fn confirm_rejection(&self, id: i64) -> CoreErrorResult<Ack> {
        Ok(self.reject_user(id).await?)
    }
}
