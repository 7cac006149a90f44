//! Token issuer: builds claim sets and produces compact signed tokens.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;

use crate::error::TokenError;
use crate::types::{Algorithm, ChannelClaims, ConnectionClaims, Credential};

/// Issues signed access tokens for the realtime server.
///
/// The algorithm and credential are bound at construction and immutable
/// thereafter. Issuing reads only that configuration plus the call
/// arguments, so a single issuer is safe to share across threads.
pub struct TokenIssuer {
    header: Header,
    key: EncodingKey,
}

impl TokenIssuer {
    /// Create an issuer with the given credential and algorithm.
    ///
    /// # Errors
    /// [`TokenError::Configuration`] when the secret is empty or the PEM
    /// key material cannot be parsed. An algorithm whose family does not
    /// match the credential is accepted here and rejected at sign time.
    pub fn new(credential: Credential, algorithm: Algorithm) -> Result<Self, TokenError> {
        let key = match credential {
            Credential::Secret(secret) => {
                if secret.is_empty() {
                    return Err(TokenError::Configuration(
                        "secret can not be empty".to_string(),
                    ));
                }
                EncodingKey::from_secret(&secret)
            }
            Credential::RsaPem(pem) => EncodingKey::from_rsa_pem(&pem)
                .map_err(|e| TokenError::Configuration(format!("invalid RSA key: {e}")))?,
            Credential::EcPem(pem) => EncodingKey::from_ec_pem(&pem)
                .map_err(|e| TokenError::Configuration(format!("invalid EC key: {e}")))?,
        };

        Ok(Self {
            header: Header::new(algorithm.to_jwt()),
            key,
        })
    }

    /// Create an HS256 issuer from a shared secret.
    ///
    /// # Errors
    /// [`TokenError::Configuration`] when the secret is empty.
    pub fn with_secret(secret: &[u8]) -> Result<Self, TokenError> {
        Self::new(Credential::Secret(secret.to_vec()), Algorithm::Hs256)
    }

    /// Issue a connection token for the given application user.
    ///
    /// # Arguments
    /// * `sub` - ID of the application user.
    /// * `info` - Optional metadata made available to the server for this
    ///   connection; omitted from the claims entirely when `None`.
    /// * `exp` - Optional expiry as UNIX epoch seconds.
    ///
    /// # Errors
    /// [`TokenError::Signing`] when the algorithm family does not match the
    /// credential.
    pub fn issue_connection_token(
        &self,
        sub: &str,
        info: Option<Value>,
        exp: Option<u64>,
    ) -> Result<String, TokenError> {
        let claims = ConnectionClaims {
            sub: sub.to_string(),
            info,
            exp,
        };
        Ok(encode(&self.header, &claims, &self.key)?)
    }

    /// Issue a private-channel subscription token.
    ///
    /// # Arguments
    /// * `sub` - ID of the connection or user requesting the subscription.
    /// * `channel` - Channel the subscription targets.
    /// * `info` - Optional metadata attached to the subscription.
    /// * `exp` - Optional expiry as UNIX epoch seconds.
    ///
    /// # Errors
    /// [`TokenError::Signing`] when the algorithm family does not match the
    /// credential.
    pub fn issue_channel_token(
        &self,
        sub: &str,
        channel: &str,
        info: Option<Value>,
        exp: Option<u64>,
    ) -> Result<String, TokenError> {
        let claims = ChannelClaims {
            sub: sub.to_string(),
            channel: channel.to_string(),
            info,
            exp,
        };
        Ok(encode(&self.header, &claims, &self.key)?)
    }
}
