//! Control API client: one method per supported command.

use serde_json::{json, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::protocol::{BearerProtocol, Protocol, SignedProtocol};
use crate::response;
use crate::types::{Command, Config, Method};

/// Client authenticating with a bearer API key.
pub type BearerClient = Client<BearerProtocol>;

/// Client using the legacy project-scoped signed protocol.
pub type SignedClient = Client<SignedProtocol>;

/// HTTP client for the Relay control API.
///
/// Each command method performs one request/response round trip and returns
/// the interpreted payload or a typed [`ApiError`]. The client holds no
/// mutable state between calls, so it can be shared freely across tasks.
#[derive(Debug, Clone)]
pub struct Client<P: Protocol> {
    /// Client configuration.
    config: Config,
    /// Authentication strategy, fixed at construction.
    protocol: P,
    /// Underlying HTTP client.
    http: reqwest::Client,
}

impl BearerClient {
    /// Create a client authenticating with a bearer API key.
    ///
    /// # Errors
    /// [`ApiError::Http`] when the transport cannot be built from the
    /// configured timeouts.
    pub fn bearer(config: Config, api_key: impl Into<String>) -> Result<Self, ApiError> {
        Client::with_protocol(config, BearerProtocol::new(api_key))
    }
}

impl SignedClient {
    /// Create a client using the legacy signed protocol for the given
    /// project key and secret.
    ///
    /// # Errors
    /// [`ApiError::Http`] when the transport cannot be built from the
    /// configured timeouts.
    pub fn signed(
        config: Config,
        project_key: impl Into<String>,
        secret: impl Into<Vec<u8>>,
    ) -> Result<Self, ApiError> {
        Client::with_protocol(config, SignedProtocol::new(project_key, secret))
    }

    /// Legacy connection token for a user, signed with this client's
    /// project key and secret.
    pub fn token_for(&self, user: &str, timestamp: u64, user_info: &str) -> String {
        self.protocol.token_for(user, timestamp, user_info)
    }
}

impl<P: Protocol> Client<P> {
    /// Create a client with an explicit protocol strategy.
    ///
    /// # Errors
    /// [`ApiError::Http`] when the transport cannot be built from the
    /// configured timeouts.
    pub fn with_protocol(config: Config, protocol: P) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .pool_idle_timeout(config.keep_alive_timeout)
            .build()?;

        Ok(Self {
            config,
            protocol,
            http,
        })
    }

    /// Publish data into a channel.
    pub async fn publish(&self, channel: &str, data: Value) -> Result<Value, ApiError> {
        self.execute(Method::Publish, json!({ "channel": channel, "data": data }))
            .await
    }

    /// Publish the same data into many channels.
    pub async fn broadcast(&self, channels: &[&str], data: Value) -> Result<Value, ApiError> {
        self.execute(
            Method::Broadcast,
            json!({ "channels": channels, "data": data }),
        )
        .await
    }

    /// Unsubscribe a user from a channel.
    pub async fn unsubscribe(&self, channel: &str, user: &str) -> Result<Value, ApiError> {
        self.execute(
            Method::Unsubscribe,
            json!({ "channel": channel, "user": user }),
        )
        .await
    }

    /// Disconnect a user by ID.
    pub async fn disconnect(&self, user: &str) -> Result<Value, ApiError> {
        self.execute(Method::Disconnect, json!({ "user": user })).await
    }

    /// Get presence information for a channel: all clients currently
    /// subscribed to it.
    pub async fn presence(&self, channel: &str) -> Result<Value, ApiError> {
        self.execute(Method::Presence, json!({ "channel": channel }))
            .await
    }

    /// Get short presence counters for a channel.
    pub async fn presence_stats(&self, channel: &str) -> Result<Value, ApiError> {
        self.execute(Method::PresenceStats, json!({ "channel": channel }))
            .await
    }

    /// Get the last messages published into a channel.
    pub async fn history(&self, channel: &str) -> Result<Value, ApiError> {
        self.execute(Method::History, json!({ "channel": channel }))
            .await
    }

    /// List active channels (with one or more subscribers).
    pub async fn channels(&self) -> Result<Value, ApiError> {
        self.execute(Method::Channels, json!({})).await
    }

    /// Get information about running server nodes.
    pub async fn info(&self) -> Result<Value, ApiError> {
        self.execute(Method::Info, json!({})).await
    }

    /// Build the command, post it, and interpret the response.
    async fn execute(&self, method: Method, params: Value) -> Result<Value, ApiError> {
        let command = Command::new(method, params);
        let url = self.protocol.url(&self.config.endpoint);
        let body = self.protocol.body(&command)?;

        debug!(method = ?method, url = %url, "dispatching control API command");

        let resp = self
            .http
            .post(&url)
            .headers(self.protocol.headers())
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let path = resp.url().path().to_string();
        let text = resp.text().await?;

        response::interpret(status, &text, &path)
    }
}
