//! Control API data types: configuration, commands, and methods.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

/// Configuration for a [`Client`](crate::Client).
///
/// For the bearer protocol `endpoint` is the full control API URL; for the
/// signed protocol it is the server base URL (the project path segment is
/// appended per request).
#[derive(Debug, Clone)]
pub struct Config {
    /// Control API endpoint (e.g. `http://localhost:8000/api`).
    pub endpoint: String,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Total request timeout, covering send and receive.
    pub timeout: Duration,
    /// Idle timeout for kept-alive connections.
    pub keep_alive_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/api".to_string(),
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(5),
            keep_alive_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Create a configuration for the given endpoint with default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Create a configuration from scheme, host, and port parts.
    pub fn from_parts(scheme: &str, host: &str, port: u16) -> Self {
        Self::new(format!("{scheme}://{host}:{port}"))
    }
}

/// A named control API command.
///
/// Serializes snake_case to match the wire method names
/// (e.g. [`Method::PresenceStats`] as `presence_stats`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Publish data into a channel.
    Publish,
    /// Publish the same data into many channels.
    Broadcast,
    /// Unsubscribe a user from a channel.
    Unsubscribe,
    /// Disconnect a user by ID.
    Disconnect,
    /// List clients subscribed to a channel.
    Presence,
    /// Short presence counters for a channel.
    PresenceStats,
    /// Last messages published into a channel.
    History,
    /// List active channels.
    Channels,
    /// Information about running server nodes.
    Info,
}

/// A single command: method plus command-specific parameters.
///
/// Built fresh per API call and immutable once built; its serialized form is
/// exactly `{"method": <name>, "params": <object>}`.
#[derive(Debug, Clone, Serialize)]
pub struct Command {
    /// Command name.
    pub method: Method,
    /// Command-specific arguments.
    pub params: Value,
}

impl Command {
    /// Build a command from a method and its parameters.
    pub fn new(method: Method, params: Value) -> Self {
        Self { method, params }
    }
}
