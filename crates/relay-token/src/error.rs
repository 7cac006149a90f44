//! Error types for token issuance.

/// Errors that can occur when constructing an issuer or signing a token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Invalid construction: empty secret or unparseable key material.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Signing failed, typically an algorithm/credential family mismatch.
    #[error("signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}
