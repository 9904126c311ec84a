use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Declares a closed wire-token enumeration.
///
/// Each enumeration carries the vendor's documented tokens plus an
/// `Unrecognized` sentinel. Resolution is total: a token this client
/// version does not know about maps to the sentinel, so decoding keeps
/// working when the vendor introduces new values. Serialize and
/// Deserialize are implemented by hand so the token table exists exactly
/// once, in the macro invocation.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Wire token this client version does not recognize.
            #[default]
            Unrecognized,
        }

        impl $name {
            /// Recognized constants, excluding [`Self::Unrecognized`].
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Maps a raw wire token to a constant.
            ///
            /// Total: matching is exact and case-sensitive. Any other
            /// input (unknown text, the empty string, absent input)
            /// yields [`Self::Unrecognized`]. Never fails.
            pub fn resolve(raw: Option<&str>) -> Self {
                match raw {
                    $(Some($token) => $name::$variant,)+
                    _ => $name::Unrecognized,
                }
            }

            /// The wire token this constant serializes to.
            ///
            /// [`Self::Unrecognized`] reports `"$unknown"`; it is a decode
            /// artifact and not a token the vendor accepts.
            pub fn as_wire(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                    $name::Unrecognized => "$unknown",
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_wire())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_wire())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                // A string node resolves through the token table; an
                // explicit null resolves to the sentinel. Any other JSON
                // type is a structural error for the surrounding document.
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok($name::resolve(raw.as_deref()))
            }
        }
    };
}

wire_enum!(
    /// Outcome of a login attempt.
    LoginStatus {
        /// The login attempt succeeded.
        Success => "$success",
        /// The login attempt failed.
        Failure => "$failure",
    }
);

wire_enum!(
    /// Disposition of user-submitted content such as a review.
    SubmissionStatus {
        /// The submission was accepted.
        Success => "$success",
        /// The submission was rejected.
        Failure => "$failure",
        /// The submission is awaiting moderation.
        Pending => "$pending",
    }
);

wire_enum!(
    /// Outcome of verifying a payment instrument with its issuer.
    VerificationStatus {
        /// Verification succeeded.
        Success => "$success",
        /// Verification failed.
        Failure => "$failure",
        /// Verification is still in progress.
        Pending => "$pending",
    }
);

wire_enum!(
    /// Social identity provider used to sign in to an account.
    SocialSignOnType {
        /// Facebook sign-on.
        Facebook => "$facebook",
        /// Google sign-on.
        Google => "$google",
        /// Twitter sign-on.
        Twitter => "$twitter",
        /// Yahoo sign-on.
        Yahoo => "$yahoo",
        /// LinkedIn sign-on.
        LinkedIn => "$linkedin",
        /// A provider without its own token.
        Other => "$other",
    }
);

wire_enum!(
    /// Kind of payment instrument attached to an order or transaction.
    PaymentType {
        /// Cash on delivery or in person.
        Cash => "$cash",
        /// Paper or electronic check.
        Check => "$check",
        /// Credit or debit card.
        CreditCard => "$credit_card",
        /// Cryptocurrency payment.
        CryptoCurrency => "$crypto_currency",
        /// Direct bank transfer (ACH, SEPA and similar).
        ElectronicFundTransfer => "$electronic_fund_transfer",
        /// Third-party financing.
        Financing => "$financing",
        /// Prepaid gift card.
        GiftCard => "$gift_card",
        /// Deferred payment against an invoice.
        Invoice => "$invoice",
        /// Money order.
        MoneyOrder => "$money_order",
        /// Loyalty or reward points.
        Points => "$points",
        /// Credit held on the user's account.
        StoreCredit => "$store_credit",
        /// An external processor not covered by the other tokens.
        ThirdPartyProcessor => "$third_party_processor",
    }
);

wire_enum!(
    /// Gateway that processed a payment instrument.
    PaymentGateway {
        /// Adyen.
        Adyen => "$adyen",
        /// Authorize.Net.
        AuthorizeNet => "$authorizenet",
        /// Braintree.
        Braintree => "$braintree",
        /// CyberSource.
        CyberSource => "$cybersource",
        /// PayPal.
        Paypal => "$paypal",
        /// Square.
        Square => "$square",
        /// Stripe.
        Stripe => "$stripe",
        /// Worldpay.
        Worldpay => "$worldpay",
    }
);

wire_enum!(
    /// Kind of money movement reported with a transaction event.
    TransactionType {
        /// Authorization and capture in one step.
        Sale => "$sale",
        /// Authorization hold without capture.
        Authorize => "$authorize",
        /// Capture of a prior authorization.
        Capture => "$capture",
        /// Void of a prior authorization.
        Void => "$void",
        /// Refund of a prior sale.
        Refund => "$refund",
        /// Deposit into a stored-value account.
        Deposit => "$deposit",
        /// Withdrawal from a stored-value account.
        Withdrawal => "$withdrawal",
        /// Peer-to-peer transfer between users.
        Transfer => "$transfer",
    }
);

wire_enum!(
    /// Outcome of a transaction as reported by the processor.
    TransactionStatus {
        /// The transaction succeeded.
        Success => "$success",
        /// The transaction failed.
        Failure => "$failure",
        /// The transaction is still in flight.
        Pending => "$pending",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_total_over_unknown_input() {
        assert_eq!(
            PaymentType::resolve(Some("unknown_future_type")),
            PaymentType::Unrecognized
        );
        assert_eq!(PaymentType::resolve(Some("")), PaymentType::Unrecognized);
        assert_eq!(PaymentType::resolve(None), PaymentType::Unrecognized);
        assert_eq!(
            LoginStatus::resolve(Some("$SUCCESS")),
            LoginStatus::Unrecognized,
            "matching is case-sensitive"
        );
    }

    #[test]
    fn resolve_round_trips_every_known_constant() {
        for &status in LoginStatus::KNOWN {
            assert_eq!(LoginStatus::resolve(Some(status.as_wire())), status);
        }
        for &ty in PaymentType::KNOWN {
            assert_eq!(PaymentType::resolve(Some(ty.as_wire())), ty);
        }
        for &gateway in PaymentGateway::KNOWN {
            assert_eq!(PaymentGateway::resolve(Some(gateway.as_wire())), gateway);
        }
        for &ty in TransactionType::KNOWN {
            assert_eq!(TransactionType::resolve(Some(ty.as_wire())), ty);
        }
    }

    #[test]
    fn known_excludes_the_sentinel() {
        assert!(!SocialSignOnType::KNOWN.contains(&SocialSignOnType::Unrecognized));
        assert_eq!(LoginStatus::KNOWN.len(), 2);
        assert_eq!(PaymentType::KNOWN.len(), 12);
    }

    #[test]
    fn serde_round_trips_known_tokens() {
        let json = serde_json::to_string(&PaymentType::ElectronicFundTransfer).unwrap();
        assert_eq!(json, r#""$electronic_fund_transfer""#);
        let back: PaymentType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PaymentType::ElectronicFundTransfer);
    }

    #[test]
    fn unknown_wire_token_deserializes_to_sentinel() {
        let status: LoginStatus = serde_json::from_str(r#""$locked_out""#).unwrap();
        assert_eq!(status, LoginStatus::Unrecognized);
    }

    #[test]
    fn explicit_null_deserializes_to_sentinel() {
        let status: SubmissionStatus = serde_json::from_str("null").unwrap();
        assert_eq!(status, SubmissionStatus::Unrecognized);
    }

    #[test]
    fn non_string_wire_value_is_an_error() {
        assert!(serde_json::from_str::<PaymentType>("7").is_err());
        assert!(serde_json::from_str::<PaymentType>("[]").is_err());
    }

    #[test]
    fn display_prints_the_wire_token() {
        assert_eq!(TransactionType::Refund.to_string(), "$refund");
        assert_eq!(TransactionStatus::Unrecognized.to_string(), "$unknown");
    }

    #[test]
    fn wire_tokens_follow_the_vendor_convention() {
        // Every documented token is a `$`-prefixed lowercase literal.
        let all: Vec<&str> = LoginStatus::KNOWN
            .iter()
            .map(|s| s.as_wire())
            .chain(SubmissionStatus::KNOWN.iter().map(|s| s.as_wire()))
            .chain(VerificationStatus::KNOWN.iter().map(|s| s.as_wire()))
            .chain(SocialSignOnType::KNOWN.iter().map(|s| s.as_wire()))
            .chain(PaymentType::KNOWN.iter().map(|s| s.as_wire()))
            .chain(PaymentGateway::KNOWN.iter().map(|s| s.as_wire()))
            .chain(TransactionType::KNOWN.iter().map(|s| s.as_wire()))
            .chain(TransactionStatus::KNOWN.iter().map(|s| s.as_wire()))
            .collect();
        for token in all {
            assert!(token.starts_with('$'), "token {token} missing $ prefix");
            assert!(
                token[1..].chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "token {token} is not a lowercase literal"
            );
        }
    }
}
