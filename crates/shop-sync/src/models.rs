//! Shop Models
//!
//! Data structures matching backend records.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::id::ItemId;

/// Asset shown when an item has no usable image
pub const PLACEHOLDER_IMAGE: &str = "img/placeholder.png";

/// Title shown when an item arrives without one
pub const PLACEHOLDER_TITLE: &str = "Sneakers";

/// Catalog product (matches backend `sneakers/` listing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    #[serde(default, deserialize_with = "de_text")]
    pub title: String,
    #[serde(default, deserialize_with = "de_price")]
    pub price: f64,
    #[serde(flatten)]
    pub images: ImageFields,
}

/// Every field name a backend has been seen to put an image URL in.
///
/// Resolution order is the declaration order below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageFields {
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "image_url", default, skip_serializing_if = "Option::is_none")]
    pub image_url_snake: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl ImageFields {
    /// First non-blank candidate, or the placeholder asset
    pub fn resolve(&self) -> &str {
        self.first().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// First non-blank candidate, if any
    pub fn first(&self) -> Option<&str> {
        [
            &self.image_url,
            &self.image_url_snake,
            &self.image,
            &self.img,
            &self.thumbnail,
            &self.photo,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .find(|url| !url.trim().is_empty())
    }
}

impl CatalogItem {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: sanitize_price(price),
            images: ImageFields::default(),
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.image_url = Some(url.into());
        self
    }

    pub fn image_src(&self) -> &str {
        self.images.resolve()
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            PLACEHOLDER_TITLE
        } else {
            &self.title
        }
    }

    /// Locally built cart entry: the id stands in until the backend assigns one
    pub fn to_cart_entry(&self) -> CartEntry {
        SavedItem {
            id: self.id.clone(),
            parent_id: self.id.clone(),
            title: self.display_title().to_string(),
            image_url: self.image_src().to_string(),
            price: self.price,
        }
    }

    /// Favorite payload, keyed by the catalog id
    pub fn to_favorite_entry(&self) -> FavoriteEntry {
        self.to_cart_entry()
    }
}

/// Catalog item saved into a user collection (cart line or favorite).
///
/// Serialized camelCase; decoded leniently through `RawSavedItem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSavedItem")]
pub struct SavedItem {
    pub id: ItemId,
    pub parent_id: ItemId,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

/// Wire form of a saved item. Backends may send camelCase and snake_case
/// keys side by side, or nulls in either.
#[derive(Deserialize)]
struct RawSavedItem {
    id: ItemId,
    #[serde(rename = "parentId", default)]
    parent_id: Option<ItemId>,
    #[serde(rename = "parent_id", default)]
    parent_id_snake: Option<ItemId>,
    #[serde(default, deserialize_with = "de_text")]
    title: String,
    #[serde(default, deserialize_with = "de_price")]
    price: f64,
    #[serde(flatten)]
    images: ImageFields,
}

impl From<RawSavedItem> for SavedItem {
    fn from(raw: RawSavedItem) -> Self {
        let parent_id = raw
            .parent_id
            .filter(|id| !id.is_empty())
            .or(raw.parent_id_snake)
            .unwrap_or_default();
        Self {
            image_url: raw.images.first().unwrap_or_default().to_string(),
            id: raw.id,
            parent_id,
            title: raw.title,
            price: raw.price,
        }
    }
}

pub type CartEntry = SavedItem;
pub type FavoriteEntry = SavedItem;

impl SavedItem {
    /// Catalog id this entry refers to; records without a parent refer to themselves
    pub fn parent(&self) -> &ItemId {
        if self.parent_id.is_empty() {
            &self.id
        } else {
            &self.parent_id
        }
    }

    /// Rebuild a catalog view of the entry for rendering with the item card
    pub fn to_catalog_item(&self) -> CatalogItem {
        let mut item = CatalogItem::new(self.parent().clone(), self.title.clone(), self.price);
        if !self.image_url.is_empty() {
            item.images.image_url = Some(self.image_url.clone());
        }
        item
    }
}

/// Placed order (matches backend `orders/` listing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: ItemId,
    #[serde(default)]
    pub items: Vec<CartEntry>,
    #[serde(
        rename = "totalPrice",
        alias = "total_price",
        default,
        deserialize_with = "de_opt_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        alias = "createdAt",
        default,
        deserialize_with = "de_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.total_price
            .unwrap_or_else(|| self.items.iter().map(|item| item.price).sum())
    }
}

/// Order payload posted at checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Vec<CartEntry>,
    pub total_price: f64,
}

impl NewOrder {
    pub fn from_entries(items: Vec<CartEntry>) -> Self {
        let total_price = items.iter().map(|item| item.price).sum();
        Self { items, total_price }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Login response body
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub auth_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: ItemId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

// ========================
// Lenient field decoding
// ========================

fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    fn value(self) -> Option<f64> {
        match self {
            RawPrice::Number(n) => Some(n),
            RawPrice::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Missing or null text decodes as empty
fn de_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Prices come as numbers or decimal strings (`"129.90"`); anything unusable is 0
fn de_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = Option::<RawPrice>::deserialize(deserializer)?;
    Ok(sanitize_price(raw.and_then(RawPrice::value).unwrap_or(0.0)))
}

fn de_opt_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<RawPrice>::deserialize(deserializer)?;
    Ok(raw.and_then(RawPrice::value).map(sanitize_price))
}

/// RFC 3339 strings or unix seconds; unknown formats are dropped rather than failing the order
fn de_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => s.parse::<DateTime<Utc>>().ok(),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_image_falls_back_to_placeholder() {
        let item: CatalogItem = serde_json::from_value(json!({"id": 1, "title": "Air Max"})).unwrap();
        assert_eq!(item.image_src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_image_candidates_resolve_in_order() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": 1,
            "title": "Air Max",
            "image_url": "/media/snake.png",
            "thumbnail": "/media/thumb.png"
        }))
        .unwrap();
        assert_eq!(item.image_src(), "/media/snake.png");

        let item: CatalogItem = serde_json::from_value(json!({
            "id": 1,
            "imageUrl": "",
            "photo": "/media/photo.png"
        }))
        .unwrap();
        assert_eq!(item.image_src(), "/media/photo.png");
    }

    #[test]
    fn test_price_from_decimal_string() {
        let item: CatalogItem =
            serde_json::from_value(json!({"id": "4", "title": "Runner", "price": "129.90"})).unwrap();
        assert!((item.price - 129.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bad_price_substitutes_zero() {
        let negative: CatalogItem =
            serde_json::from_value(json!({"id": 1, "price": -5})).unwrap();
        let garbage: CatalogItem =
            serde_json::from_value(json!({"id": 2, "price": "n/a"})).unwrap();
        let null: CatalogItem = serde_json::from_value(json!({"id": 3, "price": null})).unwrap();
        assert_eq!(negative.price, 0.0);
        assert_eq!(garbage.price, 0.0);
        assert_eq!(null.price, 0.0);
    }

    #[test]
    fn test_cart_entry_from_item() {
        let item = CatalogItem::new(9, "", 10.0);
        let entry = item.to_cart_entry();
        assert_eq!(entry.id, ItemId::from(9i64));
        assert_eq!(entry.parent_id, ItemId::from(9i64));
        assert_eq!(entry.title, PLACEHOLDER_TITLE);
        assert_eq!(entry.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_saved_item_wire_names() {
        let entry = CatalogItem::new(2, "Classic Run", 50.0).to_cart_entry();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["parentId"], json!(2));
        assert_eq!(value["imageUrl"], json!(PLACEHOLDER_IMAGE));

        let back: SavedItem = serde_json::from_value(json!({
            "id": "31", "parent_id": 2, "title": "Classic Run", "image_url": "a.png", "price": 50
        }))
        .unwrap();
        assert_eq!(back.parent(), &ItemId::from(2i64));
        assert_eq!(back.image_url, "a.png");
    }

    #[test]
    fn test_null_title_substitutes_placeholder() {
        let items: Vec<CatalogItem> = serde_json::from_value(json!([
            {"id": 1, "title": "Air Max"},
            {"id": 2, "title": null}
        ]))
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "");
        assert_eq!(items[1].display_title(), PLACEHOLDER_TITLE);

        let entry: SavedItem =
            serde_json::from_value(json!({"id": 5, "parentId": 2, "title": null})).unwrap();
        assert_eq!(entry.title, "");
    }

    #[test]
    fn test_saved_item_with_both_image_keys() {
        let entry: SavedItem = serde_json::from_value(json!({
            "id": 8,
            "parentId": 3,
            "parent_id": 3,
            "title": "Runner",
            "imageUrl": "/media/runner.png",
            "image_url": "/media/runner_snake.png",
            "price": "99.90"
        }))
        .unwrap();
        assert_eq!(entry.parent(), &ItemId::from(3i64));
        assert_eq!(entry.image_url, "/media/runner.png");
    }

    #[test]
    fn test_saved_item_null_image_and_parent() {
        let entry: SavedItem = serde_json::from_value(json!({
            "id": 8,
            "parentId": null,
            "title": "Runner",
            "imageUrl": null,
            "image_url": "/media/runner_snake.png"
        }))
        .unwrap();
        assert_eq!(entry.parent(), &ItemId::from(8i64));
        assert_eq!(entry.image_url, "/media/runner_snake.png");

        let bare: SavedItem = serde_json::from_value(json!({"id": 9, "imageUrl": null})).unwrap();
        assert_eq!(bare.image_url, "");
        assert_eq!(bare.to_catalog_item().image_src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_order_total_and_timestamps() {
        let order: Order = serde_json::from_value(json!({
            "id": 1,
            "items": [
                {"id": 1, "parentId": 1, "title": "A", "price": 10},
                {"id": 2, "parentId": 2, "title": "B", "price": 15.5}
            ],
            "createdAt": 1700000000
        }))
        .unwrap();
        assert_eq!(order.total(), 25.5);
        assert!(order.created_at.is_some());

        let django: Order = serde_json::from_value(json!({
            "id": 2,
            "total_price": "99.00",
            "status": "pending",
            "created_at": "2024-03-01T10:00:00.000000+03:00"
        }))
        .unwrap();
        assert_eq!(django.total(), 99.0);
        assert_eq!(django.status.as_deref(), Some("pending"));
        assert!(django.created_at.is_some());
    }
}
