//! Public wire representations.
//!
//! The storefront exposes a reduced product shape rather than the stored
//! document. Field names here are part of the public contract consumed by
//! the storefront frontend and must not be changed, including the
//! historical `campaingn_product` spelling.

use serde::Serialize;
use serde_json::Value;
use shopd_store::Document;

/// A product as the public storefront sees it.
#[derive(Debug, Serialize)]
pub struct PublicProduct {
    /// Document ID.
    pub id: String,
    /// Display title (the stored `name`).
    pub title: String,
    /// First image URL, if any.
    pub image: Option<String>,
    /// Brand name.
    pub brand: Option<String>,
    /// Average review rating rounded to the nearest whole star.
    pub review: i64,
    /// Formatted price, e.g. `"$19.99"`.
    pub price: Option<String>,
    /// Formatted offer price, when the product is discounted.
    pub offer_price: Option<String>,
    /// Whether the product belongs to a campaign.
    pub campaingn_product: bool,
    /// Category name.
    pub product_type: Option<String>,
    /// Reserved for campaign stock information.
    pub cam_product_available: Option<u64>,
    /// Reserved for campaign sale information.
    pub cam_product_sale: Option<u64>,
}

impl PublicProduct {
    /// Maps a stored product document to its public shape.
    pub fn from_document(doc: &Document) -> Self {
        let average = average_rating(doc);
        Self {
            id: doc.id().to_string(),
            title: doc
                .field("name")
                .as_str()
                .unwrap_or_default()
                .to_string(),
            image: doc
                .field("images")
                .as_array()
                .and_then(|images| images.first())
                .and_then(Value::as_str)
                .map(str::to_string),
            brand: doc.field("brand").as_str().map(str::to_string),
            review: average.round() as i64,
            price: format_price(doc.field("price").as_f64()),
            offer_price: format_price(doc.field("offerPrice").as_f64()),
            campaingn_product: doc
                .field("isCampaignProduct")
                .as_bool()
                .unwrap_or(false),
            product_type: category_name(doc.field("category")),
            cam_product_available: None,
            cam_product_sale: None,
        }
    }
}

/// Formats a price as a dollar string with two decimals.
fn format_price(price: Option<f64>) -> Option<String> {
    price.map(|p| format!("${:.2}", p))
}

/// The category label for a product: the expanded category's name, or the
/// raw reference when it was not expanded.
fn category_name(category: &Value) -> Option<String> {
    match category {
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Mean review rating rounded to one decimal, or zero when the product has
/// no reviews.
pub fn average_rating(doc: &Document) -> f64 {
    let ratings: Vec<f64> = doc
        .field("reviews")
        .as_array()
        .map(|reviews| {
            reviews
                .iter()
                .filter_map(|r| r.get("rating").and_then(Value::as_f64))
                .collect()
        })
        .unwrap_or_default();

    if ratings.is_empty() {
        return 0.0;
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(value: Value) -> Document {
        Document::new(value)
    }

    #[test]
    fn test_full_mapping() {
        let doc = product(json!({
            "_id": "p-1",
            "name": "Red Shirt",
            "images": ["https://img.example/red.jpg", "https://img.example/red2.jpg"],
            "brand": "Acme",
            "price": 19.99,
            "offerPrice": 14.5,
            "isCampaignProduct": true,
            "category": {"_id": "c-1", "name": "Clothing"},
            "reviews": [{"rating": 4}, {"rating": 5}],
        }));

        let dto = PublicProduct::from_document(&doc);
        assert_eq!(dto.id, "p-1");
        assert_eq!(dto.title, "Red Shirt");
        assert_eq!(dto.image.as_deref(), Some("https://img.example/red.jpg"));
        assert_eq!(dto.price.as_deref(), Some("$19.99"));
        assert_eq!(dto.offer_price.as_deref(), Some("$14.50"));
        assert_eq!(dto.review, 5); // mean 4.5 rounds up
        assert!(dto.campaingn_product);
        assert_eq!(dto.product_type.as_deref(), Some("Clothing"));
        assert!(dto.cam_product_available.is_none());
        assert!(dto.cam_product_sale.is_none());
    }

    #[test]
    fn test_sparse_document_degrades_to_nulls() {
        let doc = product(json!({"_id": "p-2", "name": "Bare"}));
        let dto = PublicProduct::from_document(&doc);
        assert!(dto.image.is_none());
        assert!(dto.brand.is_none());
        assert!(dto.price.is_none());
        assert!(dto.offer_price.is_none());
        assert_eq!(dto.review, 0);
        assert!(!dto.campaingn_product);
        assert!(dto.product_type.is_none());
    }

    #[test]
    fn test_average_rating_one_decimal() {
        let doc = product(json!({
            "reviews": [{"rating": 4}, {"rating": 4}, {"rating": 5}],
        }));
        // 13/3 = 4.333.. -> 4.3
        assert_eq!(average_rating(&doc), 4.3);
    }

    #[test]
    fn test_unexpanded_category_passes_through() {
        let doc = product(json!({"_id": "p", "name": "X", "category": "c-9"}));
        let dto = PublicProduct::from_document(&doc);
        assert_eq!(dto.product_type.as_deref(), Some("c-9"));
    }

    #[test]
    fn test_wire_field_names() {
        let doc = product(json!({"_id": "p", "name": "X"}));
        let value = serde_json::to_value(PublicProduct::from_document(&doc)).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert!(keys.iter().any(|k| *k == "campaingn_product"));
        assert!(keys.iter().any(|k| *k == "product_type"));
        assert!(keys.iter().any(|k| *k == "cam_product_available"));
    }
}
