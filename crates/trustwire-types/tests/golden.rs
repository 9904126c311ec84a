use serde_json::json;
use trustwire_types::{
    Address, Item, LoginStatus, PaymentGateway, PaymentMethod, PaymentType, SocialSignOnType,
    VerificationStatus,
};

#[test]
fn address_serializes_to_golden_json() {
    let address = Address {
        name: Some("Matthew Borg".to_string()),
        address_1: Some("1 Triq ir-Repubblika".to_string()),
        city: Some("Valletta".to_string()),
        country: Some("MT".to_string()),
        zipcode: Some("VLT 1111".to_string()),
        ..Default::default()
    };

    assert_eq!(
        serde_json::to_value(&address).unwrap(),
        json!({
            "$name": "Matthew Borg",
            "$address_1": "1 Triq ir-Repubblika",
            "$city": "Valletta",
            "$country": "MT",
            "$zipcode": "VLT 1111"
        })
    );
}

#[test]
fn payment_method_serializes_to_golden_json() {
    let method = PaymentMethod {
        payment_type: Some(PaymentType::CreditCard),
        payment_gateway: Some(PaymentGateway::Braintree),
        card_bin: Some("542486".to_string()),
        card_last4: Some("4444".to_string()),
        avs_result_code: Some("Y".to_string()),
        cvv_result_code: Some("M".to_string()),
        verification_status: Some(VerificationStatus::Success),
    };

    assert_eq!(
        serde_json::to_value(&method).unwrap(),
        json!({
            "$payment_type": "$credit_card",
            "$payment_gateway": "$braintree",
            "$card_bin": "542486",
            "$card_last4": "4444",
            "$avs_result_code": "Y",
            "$cvv_result_code": "M",
            "$verification_status": "$success"
        })
    );
}

#[test]
fn item_round_trips_field_for_field() {
    let item = Item {
        item_id: Some("B004834GQO".to_string()),
        product_title: Some("The Slanket Blanket-Texas Tea".to_string()),
        price: Some(39_990_000),
        currency_code: Some("USD".to_string()),
        quantity: Some(2),
        upc: Some("6786211451001".to_string()),
        sku: Some("004834GQ".to_string()),
        brand: Some("Slanket".to_string()),
        manufacturer: Some("Slanket".to_string()),
        category: Some("Blankets & Throws".to_string()),
        tags: Some(vec!["Awesome".to_string(), "Wintertime specials".to_string()]),
        color: Some("Texas Tea".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_string(&item).unwrap();
    let back: Item = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
}

#[test]
fn enum_resolution_never_fails_on_vendor_additions() {
    for raw in ["$brand_new_vendor_value", "", "credit_card", "$CREDIT_CARD"] {
        assert_eq!(
            PaymentType::resolve(Some(raw)),
            PaymentType::Unrecognized,
            "{raw:?} should resolve to the sentinel"
        );
    }
    assert_eq!(LoginStatus::resolve(None), LoginStatus::Unrecognized);
    assert_eq!(
        SocialSignOnType::resolve(Some("$facebook")),
        SocialSignOnType::Facebook
    );
}

#[test]
fn deserializing_missing_fields_yields_unset_options() {
    let address: Address = serde_json::from_str(r#"{"$city":"Valletta"}"#).unwrap();
    assert_eq!(address.city.as_deref(), Some("Valletta"));
    assert!(address.name.is_none());
    assert!(address.phone.is_none());
}
