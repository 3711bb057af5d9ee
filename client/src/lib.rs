//! Persistence gateway: carries module snapshots to the backend store.
//!
//! DESIGN
//! ======
//! `save` serializes the full current snapshot and submits it in a single
//! request; the store replaces the caller's previous array wholesale, so
//! there is no partial persist and nothing to roll back on failure. The
//! request and connect timeouts are explicit — a hung backend surfaces as a
//! [`PersistError`] instead of blocking forever. There is no automatic retry.
//!
//! Response handling is split into pure `parse_*` functions so the
//! status-to-error mapping is testable without a network.


use std::time::Duration;

use canvas::module::ModuleRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SAVE_PATH: &str = "/save-modules";
const MODULES_PATH: &str = "/modules";
const USER_ID_HEADER: &str = "x-user-id";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
    /// Transport-level failure, including timeouts.
    #[error("request failed: {0}")]
    Request(String),
    /// The store answered with a non-success status.
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unparseable server response: {0}")]
    Parse(String),
}

/// Acknowledgement body returned by the store on a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaveAck {
    pub status: String,
}

#[derive(Serialize)]
struct SavePayload<'a> {
    modules: &'a [ModuleRecord],
}

/// HTTP client bound to one backend store and one caller identity.
pub struct SaveClient {
    http: reqwest::Client,
    base_url: String,
    user_id: Uuid,
}

impl SaveClient {
    /// Build a client for the store at `base_url`, acting as `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `ClientBuild` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, user_id: Uuid) -> Result<Self, PersistError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| PersistError::ClientBuild(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url, user_id })
    }

    /// Submit the full snapshot to the store in one request.
    ///
    /// The canvas keeps accepting local edits while this call is in flight;
    /// edits made after the snapshot was taken are not included, so the
    /// persisted array can be immediately stale. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns `Request` on a transport fault or timeout, `Status` on a
    /// non-success response. The local store is never mutated by a save.
    pub async fn save(&self, modules: &[ModuleRecord]) -> Result<SaveAck, PersistError> {
        tracing::debug!(count = modules.len(), "saving modules");

        let response = self
            .http
            .post(format!("{}{SAVE_PATH}", self.base_url))
            .header(USER_ID_HEADER, self.user_id.to_string())
            .json(&SavePayload { modules })
            .send()
            .await
            .map_err(|e| PersistError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PersistError::Request(e.to_string()))?;

        match parse_save_ack(status, &body) {
            Ok(ack) => {
                tracing::info!(count = modules.len(), "modules saved");
                Ok(ack)
            }
            Err(e) => {
                tracing::warn!(error = %e, "save rejected");
                Err(e)
            }
        }
    }

    /// Fetch the caller's stored module array.
    ///
    /// # Errors
    ///
    /// Returns `Request` on a transport fault or timeout, `Status` on a
    /// non-success response, `Parse` on a malformed body.
    pub async fn load(&self) -> Result<Vec<ModuleRecord>, PersistError> {
        let response = self
            .http
            .get(format!("{}{MODULES_PATH}", self.base_url))
            .header(USER_ID_HEADER, self.user_id.to_string())
            .send()
            .await
            .map_err(|e| PersistError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PersistError::Request(e.to_string()))?;

        parse_modules_body(status, &body)
    }

    /// The caller identity sent with every request.
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }
}

fn parse_save_ack(status: u16, body: &str) -> Result<SaveAck, PersistError> {
    if status != 200 {
        return Err(PersistError::Status { status, body: body.to_owned() });
    }
    serde_json::from_str(body).map_err(|e| PersistError::Parse(e.to_string()))
}

fn parse_modules_body(status: u16, body: &str) -> Result<Vec<ModuleRecord>, PersistError> {
    if status != 200 {
        return Err(PersistError::Status { status, body: body.to_owned() });
    }
    serde_json::from_str(body).map_err(|e| PersistError::Parse(e.to_string()))
}
