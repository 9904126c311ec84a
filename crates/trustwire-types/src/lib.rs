//! Wire-level primitives for trustwire activity events.
//!
//! Every type in this crate mirrors a nested record or enumeration of the
//! fraud-detection vendor's JSON API. Fields alias to the vendor's
//! `$`-prefixed wire keys, absent fields are omitted from wire documents,
//! and enumerations resolve unrecognized wire tokens to an explicit
//! sentinel instead of failing.
//!
#![deny(missing_docs)]

/// Postal address records attached to accounts, orders and transactions.
pub mod address;
/// Closed wire-token enumerations with total resolution.
pub mod enums;
/// Line-item records attached to orders and cart events.
pub mod item;
/// Payment instrument records.
pub mod payment;

pub use address::Address;
pub use enums::{
    LoginStatus, PaymentGateway, PaymentType, SocialSignOnType, SubmissionStatus,
    TransactionStatus, TransactionType, VerificationStatus,
};
pub use item::Item;
pub use payment::PaymentMethod;
