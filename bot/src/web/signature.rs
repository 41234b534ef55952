//! Discord interaction signature verification.
//!
//! Discord signs every interaction request with the application's Ed25519
//! key. The signature covers the timestamp header concatenated with the raw
//! request body.
//! Reference: https://discord.com/developers/docs/interactions/overview#setting-up-an-endpoint-validating-security-request-headers

use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use tracing::warn;

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";

/// Header carrying the timestamp the signature covers.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Parse the hex-encoded application public key.
///
/// Called once at startup; a malformed key is a startup error, the
/// verification gate is never optional.
pub fn parse_public_key(hex_key: &str) -> anyhow::Result<VerifyingKey> {
    let bytes = hex::decode(hex_key.trim())?;

    let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("public key must be {} bytes", PUBLIC_KEY_LENGTH))?;

    Ok(VerifyingKey::from_bytes(&bytes)?)
}

/// Verify an interaction request signature.
///
/// The signed message is `timestamp || body`. Returns `false` on any
/// failure: bad hex, wrong length, or signature mismatch.
pub fn verify_signature(
    public_key: &VerifyingKey,
    signature_hex: &str,
    timestamp: &str,
    body: &[u8],
) -> bool {
    let signature_bytes = match hex::decode(signature_hex) {
        Ok(bytes) => bytes,
        Err(_) => {
            warn!("interaction_signature_not_hex");
            return false;
        }
    };

    let signature_bytes: [u8; SIGNATURE_LENGTH] = match signature_bytes.try_into() {
        Ok(bytes) => bytes,
        Err(_) => {
            warn!("interaction_signature_bad_length");
            return false;
        }
    };

    let signature = Signature::from_bytes(&signature_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    let valid = public_key.verify(&message, &signature).is_ok();

    if !valid {
        warn!(timestamp = %timestamp, "interaction_signature_mismatch");
    }

    valid
}
