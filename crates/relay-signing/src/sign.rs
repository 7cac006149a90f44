//! Keyed-hash signing functions.
//!
//! The legacy command protocol authenticates request bodies with HMAC-MD5;
//! the later signed variants use HMAC-SHA256. Both are exposed here as
//! plain functions returning lowercase hex so callers can bind a MAC to
//! whatever canonical byte string their protocol requires.

use hmac::{Hmac, Mac};
use md5::Md5;
use sha2::Sha256;

/// Compute HMAC-MD5 of the message with the given key.
///
/// This is the digest used by the legacy signed command protocol, where the
/// message is the concatenation of the project key and the serialized
/// command body.
///
/// # Arguments
/// * `key` - The shared secret bytes.
/// * `message` - The message bytes to authenticate.
///
/// # Returns
/// The 16-byte MAC as a lowercase hex string.
pub fn hmac_md5_hex(key: &[u8], message: &[u8]) -> String {
    type HmacMd5 = Hmac<Md5>;
    let mut mac = HmacMd5::new_from_slice(key)
        .expect("HMAC accepts any key length");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Compute HMAC-SHA256 of the message with the given key.
///
/// # Arguments
/// * `key` - The shared secret bytes.
/// * `message` - The message bytes to authenticate.
///
/// # Returns
/// The 32-byte MAC as a lowercase hex string.
pub fn hmac_sha256_hex(key: &[u8], message: &[u8]) -> String {
    type HmacSha256 = Hmac<Sha256>;
    let mut mac = HmacSha256::new_from_slice(key)
        .expect("HMAC accepts any key length");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Compute the private-channel subscription sign.
///
/// Authenticates a `(client, channel, user_info)` tuple for a private-channel
/// subscription without issuing a full token: HMAC-SHA256 over the
/// concatenation `client + channel + user_info`.
///
/// # Arguments
/// * `secret` - The shared secret bytes.
/// * `client` - ID of the connection requesting the subscription.
/// * `channel` - Channel name being subscribed to.
/// * `user_info` - Serialized user info attached to the subscription
///   (empty string when none).
///
/// # Returns
/// The MAC as a lowercase hex string.
pub fn channel_sign(secret: &[u8], client: &str, channel: &str, user_info: &str) -> String {
    let mut message = String::with_capacity(client.len() + channel.len() + user_info.len());
    message.push_str(client);
    message.push_str(channel);
    message.push_str(user_info);
    hmac_sha256_hex(secret, message.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_md5_reference_digest() {
        assert_eq!(
            hmac_md5_hex(b"secret", b"42test"),
            "be58c141d5f7b3071705f384f04c1f42"
        );
    }

    #[test]
    fn test_hmac_md5_rfc2202_case_2() {
        assert_eq!(
            hmac_md5_hex(b"Jefe", b"what do ya want for nothing?"),
            "750c783e6ab0b503eaa86e310a5db738"
        );
    }

    #[test]
    fn test_hmac_sha256_reference_digest() {
        assert_eq!(
            hmac_sha256_hex(b"secret", b"42test"),
            "184041423ba8f184a47471e35936a085e7fea0d598ddd09b8b6dcb1782493649"
        );
    }

    #[test]
    fn test_hmac_sha256_rfc4231_case_2() {
        assert_eq!(
            hmac_sha256_hex(b"Jefe", b"what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_channel_sign_concatenates_tuple() {
        let signed = channel_sign(b"secret", "client", "channel", "{}");
        assert_eq!(
            signed,
            "6aae21b95e459ad2b27d265271811ff670e85bd8af709765915d400444c9217e"
        );
        assert_eq!(signed, hmac_sha256_hex(b"secret", b"clientchannel{}"));
    }

    #[test]
    fn test_channel_sign_empty_user_info() {
        assert_eq!(
            channel_sign(b"secret", "client", "channel", ""),
            "0cfbfe91c28f11cdda195a1ba2379746e36a30b61c10a7a5936fca9333a69255"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = hmac_md5_hex(b"secret", b"payload");
        let b = hmac_md5_hex(b"secret", b"payload");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_depends_on_key() {
        assert_ne!(
            hmac_md5_hex(b"secret", b"payload"),
            hmac_md5_hex(b"other", b"payload")
        );
    }
}
