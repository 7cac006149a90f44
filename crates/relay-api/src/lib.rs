#![deny(missing_docs)]

//! # relay-api
//!
//! HTTP control API client for the Relay realtime server.
//!
//! Lets a backend application issue administrative commands against the
//! server's control endpoint: publish and broadcast data into channels,
//! query presence and history, unsubscribe and disconnect users, and list
//! active channels and running nodes.
//!
//! Two authentication protocols exist as alternative strategies, fixed at
//! client construction:
//!
//! - **Bearer**: commands are posted as `{"method": .., "params": ..}` with
//!   an `Authorization: apikey <key>` header.
//! - **Signed**: the legacy project-scoped protocol; the serialized command
//!   is wrapped in a `{"data": .., "sign": ..}` envelope whose MAC binds it
//!   to a project key.
//!
//! # Example
//!
//! ```no_run
//! use relay_api::{Client, Config};
//!
//! # async fn example() -> Result<(), relay_api::ApiError> {
//! let client = Client::bearer(Config::default(), "api key")?;
//!
//! client
//!     .publish("chat", serde_json::json!({"content": "hello"}))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{BearerClient, Client, SignedClient};
pub use error::ApiError;
pub use protocol::{BearerProtocol, Protocol, SignedProtocol};
pub use types::{Command, Config, Method};
