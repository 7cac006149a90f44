#![deny(missing_docs)]

//! # relay-token
//!
//! Signed access token issuance for the Relay realtime server.
//!
//! Backend applications issue compact JWTs that end-user clients present
//! when connecting to the realtime server: a connection token asserting the
//! application user's identity, and a channel token authorizing a single
//! private-channel subscription.
//!
//! The signature algorithm and credential are fixed at construction. To sign
//! with several algorithms concurrently, construct one [`TokenIssuer`] per
//! algorithm/credential pair.
//!
//! # Example
//!
//! ```
//! use relay_token::TokenIssuer;
//!
//! # fn example() -> Result<(), relay_token::TokenError> {
//! let issuer = TokenIssuer::with_secret(b"secret")?;
//!
//! let token = issuer.issue_connection_token("42", None, Some(1_700_000_000))?;
//! assert_eq!(token.split('.').count(), 3);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod issuer;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::TokenError;
pub use issuer::TokenIssuer;
pub use types::{Algorithm, ChannelClaims, ConnectionClaims, Credential};
