//! Authentication protocol strategies.
//!
//! The control API has two incompatible generations: the current one
//! authenticates with a bearer API key header, the legacy one signs each
//! command body with a project-scoped MAC. A client is constructed with one
//! strategy and never mixes them at call time.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;

use crate::error::ApiError;
use crate::types::Command;

/// Request-shaping strategy for one protocol generation.
///
/// Implementations decide where a command is posted, which headers carry
/// the credentials, and how the command is framed in the wire body.
pub trait Protocol: Send + Sync {
    /// Absolute URL the command is posted to.
    fn url(&self, endpoint: &str) -> String;

    /// Headers attached to every request.
    fn headers(&self) -> HeaderMap;

    /// Serialized wire body for the command.
    ///
    /// # Errors
    /// [`ApiError::Serialization`] when the command cannot be encoded.
    fn body(&self, command: &Command) -> Result<String, ApiError>;
}

fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Bearer API key authentication.
///
/// The command travels unsigned as `{"method": .., "params": ..}`; the
/// credential goes out-of-band in the `Authorization` header.
#[derive(Debug, Clone)]
pub struct BearerProtocol {
    api_key: String,
}

impl BearerProtocol {
    /// Create a bearer strategy for the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl Protocol for BearerProtocol {
    fn url(&self, endpoint: &str) -> String {
        endpoint.to_string()
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = base_headers();
        if let Ok(val) = HeaderValue::from_str(&format!("apikey {}", self.api_key)) {
            headers.insert(AUTHORIZATION, val);
        }
        headers
    }

    fn body(&self, command: &Command) -> Result<String, ApiError> {
        Ok(serde_json::to_string(command)?)
    }
}

/// Legacy project-scoped command signing.
///
/// The serialized command is wrapped in `{"data": .., "sign": ..}` where the
/// sign is an HMAC-MD5 over `project_key + data`. Binding the MAC to the
/// project key prevents replaying a captured command against another tenant.
#[derive(Debug, Clone)]
pub struct SignedProtocol {
    project_key: String,
    secret: Vec<u8>,
}

impl SignedProtocol {
    /// Create a signed strategy for the given project key and secret.
    pub fn new(project_key: impl Into<String>, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            project_key: project_key.into(),
            secret: secret.into(),
        }
    }

    /// Sign a message bound to this project: HMAC-MD5 over
    /// `project_key + message`.
    pub fn sign(&self, message: &str) -> String {
        let bound = format!("{}{}", self.project_key, message);
        relay_signing::hmac_md5_hex(&self.secret, bound.as_bytes())
    }

    /// Legacy connection token for a user: the project-bound MAC over
    /// `user + timestamp + user_info`.
    ///
    /// Predates JWT connection tokens; clients of the legacy protocol
    /// present this hex token together with the same user, timestamp, and
    /// info values when connecting.
    pub fn token_for(&self, user: &str, timestamp: u64, user_info: &str) -> String {
        self.sign(&format!("{user}{timestamp}{user_info}"))
    }
}

impl Protocol for SignedProtocol {
    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", endpoint, self.project_key)
    }

    fn headers(&self) -> HeaderMap {
        base_headers()
    }

    fn body(&self, command: &Command) -> Result<String, ApiError> {
        let data = serde_json::to_string(command)?;
        let sign = self.sign(&data);
        Ok(serde_json::to_string(&json!({ "data": data, "sign": sign }))?)
    }
}
