use serde::{Deserialize, Serialize};

/// Postal address as entered by the user.
///
/// Embedded by value in account, order and transaction events as the
/// billing or shipping address. Every field is optional; absent fields are
/// omitted from the wire document rather than serialized as `null`, and
/// equality compares all fields null-safely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Full name of the addressee.
    #[serde(rename = "$name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// First address line.
    #[serde(rename = "$address_1", skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,
    /// Second address line.
    #[serde(rename = "$address_2", skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    /// City or locality.
    #[serde(rename = "$city", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Region, state or province.
    #[serde(rename = "$region", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Country code.
    #[serde(rename = "$country", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Postal or ZIP code.
    #[serde(rename = "$zipcode", skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    /// Phone number at this address, starting with the country code.
    #[serde(rename = "$phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let address = Address {
            city: Some("Valletta".to_string()),
            country: Some("MT".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            r#"{"$city":"Valletta","$country":"MT"}"#
        );
    }

    #[test]
    fn empty_address_is_an_empty_object() {
        assert_eq!(serde_json::to_string(&Address::default()).unwrap(), "{}");
    }

    #[test]
    fn equality_is_null_safe() {
        let a = Address {
            city: Some("Valletta".to_string()),
            ..Default::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.zipcode = Some("VLT 1111".to_string());
        assert_ne!(a, b);
    }
}
