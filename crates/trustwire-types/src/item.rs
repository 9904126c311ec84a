use serde::{Deserialize, Serialize};

/// One product or service in an order or cart event.
///
/// Always embedded by value, either singly (cart events) or as an element
/// of an ordered `$items` sequence (orders). Monetary amounts are micros in
/// the item's currency: 1 cent = 10,000 micros, so $1.23 = 1,230,000.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Identifier for this item in the application's catalog.
    #[serde(rename = "$item_id", skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Display title of the product.
    #[serde(rename = "$product_title", skip_serializing_if = "Option::is_none")]
    pub product_title: Option<String>,
    /// Unit price in micros of `currency_code`.
    #[serde(rename = "$price", skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// ISO-4217 currency code for `price`.
    #[serde(rename = "$currency_code", skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Quantity ordered.
    #[serde(rename = "$quantity", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Universal Product Code.
    #[serde(rename = "$upc", skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    /// Stock-keeping unit.
    #[serde(rename = "$sku", skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// International Standard Book Number.
    #[serde(rename = "$isbn", skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// Brand name.
    #[serde(rename = "$brand", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Manufacturer name.
    #[serde(rename = "$manufacturer", skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Application-defined product category.
    #[serde(rename = "$category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Ordered list of application-defined tags.
    #[serde(rename = "$tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Color variant.
    #[serde(rename = "$color", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Size variant.
    #[serde(rename = "$size", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_order_survives_the_round_trip() {
        let item = Item {
            item_id: Some("sku-1".to_string()),
            tags: Some(vec!["sale".to_string(), "clearance".to_string()]),
            ..Default::default()
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
        assert_eq!(
            back.tags.as_deref(),
            Some(&["sale".to_string(), "clearance".to_string()][..])
        );
    }

    #[test]
    fn price_is_carried_in_micros() {
        let item = Item {
            price: Some(1_230_000),
            currency_code: Some("USD".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"$price":1230000,"$currency_code":"USD"}"#
        );
    }
}
