#![deny(missing_docs)]

//! Relay server-side SDK - Complete SDK.
//!
//! Re-exports all Relay SDK components for convenient single-crate usage.

pub use relay_api as api;
pub use relay_signing as signing;
pub use relay_token as token;
