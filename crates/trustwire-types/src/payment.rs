use serde::{Deserialize, Serialize};

use crate::enums::{PaymentGateway, PaymentType, VerificationStatus};

/// Payment instrument attached to an account, order or transaction.
///
/// Appears singly on transaction events and as an element of an ordered
/// `$payment_methods` sequence elsewhere. The enum-typed fields tolerate
/// tokens this client version does not know: they resolve to each
/// enumeration's sentinel and the surrounding decode succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Kind of instrument.
    #[serde(rename = "$payment_type", skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    /// Gateway that processed the instrument.
    #[serde(rename = "$payment_gateway", skip_serializing_if = "Option::is_none")]
    pub payment_gateway: Option<PaymentGateway>,
    /// First six digits of the card number.
    #[serde(rename = "$card_bin", skip_serializing_if = "Option::is_none")]
    pub card_bin: Option<String>,
    /// Last four digits of the card number.
    #[serde(rename = "$card_last4", skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
    /// Address Verification System result code from the gateway.
    #[serde(rename = "$avs_result_code", skip_serializing_if = "Option::is_none")]
    pub avs_result_code: Option<String>,
    /// CVV check result code from the gateway.
    #[serde(rename = "$cvv_result_code", skip_serializing_if = "Option::is_none")]
    pub cvv_result_code: Option<String>,
    /// Issuer verification outcome for this instrument.
    #[serde(
        rename = "$verification_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub verification_status: Option<VerificationStatus>,
}
