use thiserror::Error;

/// Errors surfaced by the event codec.
///
/// Unrecognized enumeration tokens are deliberately absent: they resolve
/// to sentinels during decode (see `trustwire-types`) and never surface
/// here.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document could not be parsed into the expected event shape.
    ///
    /// Covers truncated or syntactically invalid JSON, a wrong JSON type
    /// for a field, and an unknown `"$type"` discriminator. The underlying
    /// message carries the offending location (line and column) and the
    /// field the parser stopped at where available.
    #[error("malformed event document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The encoded event could not be canonicalized for fingerprinting.
    #[error("canonicalization failed: {0}")]
    Canonical(String),
}
