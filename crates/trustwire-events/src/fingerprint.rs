use base64::Engine;
use canonical_json::to_string;
use sha2::{Digest, Sha256};

use crate::errors::CodecError;
use crate::events::Event;

/// Computes a stable content fingerprint for an event.
///
/// The fingerprint is the SHA-256 of the event's RFC 8785 canonical JSON
/// bytes, encoded as base64url without padding. Structurally equal events
/// produce equal fingerprints regardless of field declaration order or
/// formatting, which makes the value usable as a client-side
/// deduplication key that survives process restarts.
pub fn fingerprint(event: &Event) -> Result<String, CodecError> {
    let value = serde_json::to_value(event)?;
    let canonical = to_string(&value).map_err(|err| CodecError::Canonical(err.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let hash = hasher.finalize();

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash))
}
