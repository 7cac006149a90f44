#![deny(missing_docs)]

//! # relay-signing
//!
//! HMAC signing primitives for the Relay server control API.
//!
//! Provides the keyed-hash functions used by the signed command protocol
//! (HMAC-MD5 over `project_key + body`) and the private-channel subscription
//! sign (HMAC-SHA256 over `client + channel + user_info`). All functions are
//! pure and return lowercase hexadecimal digests.
//!
//! # Example
//!
//! ```
//! use relay_signing::hmac_md5_hex;
//!
//! let mac = hmac_md5_hex(b"secret", b"42test");
//! assert_eq!(mac, "be58c141d5f7b3071705f384f04c1f42");
//! ```

pub mod sign;

pub use sign::{channel_sign, hmac_md5_hex, hmac_sha256_hex};
