//! Token data types: algorithms, credentials, and claim sets.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Signature algorithm for issued tokens.
///
/// A closed set: the HMAC family signs with a shared secret, the RSA and
/// ECDSA families with an asymmetric private key. The algorithm family must
/// match the [`Credential`](crate::Credential) family; a mismatch is
/// reported by the signing primitive at sign time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// HMAC with SHA-256 (the default).
    #[default]
    Hs256,
    /// HMAC with SHA-384.
    Hs384,
    /// HMAC with SHA-512.
    Hs512,
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    Rs256,
    /// RSASSA-PKCS1-v1_5 with SHA-384.
    Rs384,
    /// RSASSA-PKCS1-v1_5 with SHA-512.
    Rs512,
    /// ECDSA with P-256 and SHA-256.
    Es256,
    /// ECDSA with P-384 and SHA-384.
    Es384,
}

impl Algorithm {
    /// Map to the underlying JWT library algorithm tag.
    pub(crate) fn to_jwt(self) -> jsonwebtoken::Algorithm {
        match self {
            Algorithm::Hs256 => jsonwebtoken::Algorithm::HS256,
            Algorithm::Hs384 => jsonwebtoken::Algorithm::HS384,
            Algorithm::Hs512 => jsonwebtoken::Algorithm::HS512,
            Algorithm::Rs256 => jsonwebtoken::Algorithm::RS256,
            Algorithm::Rs384 => jsonwebtoken::Algorithm::RS384,
            Algorithm::Rs512 => jsonwebtoken::Algorithm::RS512,
            Algorithm::Es256 => jsonwebtoken::Algorithm::ES256,
            Algorithm::Es384 => jsonwebtoken::Algorithm::ES384,
        }
    }
}

/// Signing credential held by a [`TokenIssuer`](crate::TokenIssuer).
///
/// Owned by the caller and never persisted by the SDK.
#[derive(Clone)]
pub enum Credential {
    /// Raw shared secret for the HMAC family.
    Secret(Vec<u8>),
    /// PEM-encoded RSA private key for the RSA family.
    RsaPem(Vec<u8>),
    /// PEM-encoded EC private key for the ECDSA family.
    EcPem(Vec<u8>),
}

impl std::fmt::Debug for Credential {
    // Key material stays out of debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Secret(_) => f.write_str("Credential::Secret(..)"),
            Credential::RsaPem(_) => f.write_str("Credential::RsaPem(..)"),
            Credential::EcPem(_) => f.write_str("Credential::EcPem(..)"),
        }
    }
}

/// Claim set embedded in a connection token.
///
/// Optional fields are omitted from the encoded payload entirely when
/// absent, so a token issued without `info` decodes to a payload with no
/// `info` key at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionClaims {
    /// ID of the application user this connection belongs to.
    pub sub: String,
    /// Opaque metadata attached to the connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
    /// Absolute expiry as UNIX epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Claim set embedded in a private-channel subscription token.
///
/// The subscriber identifier is carried in the `sub` claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelClaims {
    /// ID of the connection or user requesting the subscription.
    pub sub: String,
    /// Channel the token authorizes a subscription to.
    pub channel: String,
    /// Opaque metadata attached to the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
    /// Absolute expiry as UNIX epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}
