//! Typed user-activity events and the JSON codec for the trustwire client.
//!
//! An application constructs one concrete event per reportable activity,
//! hands it to [`codec::encode`], and ships the resulting document through
//! its transport of choice. [`codec::decode`] turns raw JSON back into a
//! typed [`Event`]. Unrecognized enumeration tokens inside a document
//! resolve to sentinels instead of failing the decode; only structural
//! problems (truncated document, wrong JSON type, unknown discriminator)
//! abort it.
//!
//! Core invariants:
//! - Events are plain data values; the discriminator is fixed by the
//!   variant and always serialized under `"$type"`
//! - Absent optional fields are omitted from wire documents, never
//!   emitted as `null`
//! - Equality and hashing are structural over the whole object graph,
//!   including nested records and ordered sequences
//!
#![deny(missing_docs)]

/// JSON encode/decode entry points.
pub mod codec;
/// Error types for codec operations.
pub mod errors;
/// The event hierarchy and concrete event payloads.
pub mod events;
/// Content-derived event fingerprints for deduplication.
pub mod fingerprint;

pub use codec::{decode, decode_value, encode, encode_value};
pub use errors::CodecError;
pub use events::{
    AddItemToCart, CreateAccount, CreateOrder, Event, LinkSessionToUser, Login, Logout,
    RemoveItemFromCart, SendMessage, SubmitReview, Transaction, UpdateAccount,
};
pub use fingerprint::fingerprint;
