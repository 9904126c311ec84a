use serde_json::Value;

use crate::errors::CodecError;
use crate::events::Event;

/// Serializes an event to its JSON wire document.
///
/// Field keys follow the vendor's `$`-prefixed aliases; absent optional
/// fields are omitted entirely. The discriminator is emitted under
/// `"$type"`.
pub fn encode(event: &Event) -> Result<String, CodecError> {
    Ok(serde_json::to_string(event)?)
}

/// Serializes an event to an in-memory JSON value.
///
/// Useful when the transport layer wants to merge in envelope fields
/// before shipping the document.
pub fn encode_value(event: &Event) -> Result<Value, CodecError> {
    Ok(serde_json::to_value(event)?)
}

/// Parses a JSON wire document into a typed [`Event`].
///
/// Structural failures (a truncated document, a wrong JSON type for a
/// field, an unknown `"$type"` discriminator) abort this decode with
/// [`CodecError::Malformed`]. Unrecognized enumeration tokens do not:
/// they resolve to each enumeration's sentinel and the decode succeeds,
/// so a vendor rolling out new tokens cannot break event processing.
pub fn decode(input: &str) -> Result<Event, CodecError> {
    Ok(serde_json::from_str(input)?)
}

/// Parses an in-memory JSON value into a typed [`Event`].
pub fn decode_value(value: Value) -> Result<Event, CodecError> {
    Ok(serde_json::from_value(value)?)
}
