//! Item Identifiers
//!
//! Backends hand out ids as JSON numbers (`7`) or strings (`"7"`), and the
//! frontend builds payloads from both. `ItemId` canonicalizes numeric text at
//! construction so equality and hashing treat them as one value.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref().trim();
        match raw.parse::<i64>() {
            Ok(n) => Self(n.to_string()),
            Err(_) => Self(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_number(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        Self(n.to_string())
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_number() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

struct ItemIdVisitor;

impl<'de> Visitor<'de> for ItemIdVisitor {
    type Value = ItemId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or string identifier")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ItemId, E> {
        Ok(ItemId::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ItemId, E> {
        Ok(ItemId(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ItemId, E> {
        if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
            Ok(ItemId::from(v as i64))
        } else {
            Ok(ItemId(v.to_string()))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ItemId, E> {
        Ok(ItemId::new(v))
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ItemIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_text_equals_number() {
        assert_eq!(ItemId::from("7"), ItemId::from(7i64));
        assert_eq!(ItemId::from("007"), ItemId::from(7i64));
        assert_eq!(ItemId::from(" 12 "), ItemId::from(12u32));
    }

    #[test]
    fn test_non_numeric_compares_verbatim() {
        assert_eq!(ItemId::from("abc"), ItemId::from("abc"));
        assert_ne!(ItemId::from("abc"), ItemId::from("ABC"));
        assert_ne!(ItemId::from("7a"), ItemId::from(7i64));
    }

    #[test]
    fn test_deserialize_number_and_string() {
        let a: ItemId = serde_json::from_value(json!(15)).unwrap();
        let b: ItemId = serde_json::from_value(json!("15")).unwrap();
        let c: ItemId = serde_json::from_value(json!(15.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_serialize_numeric_as_number() {
        assert_eq!(serde_json::to_value(ItemId::from("3")).unwrap(), json!(3));
        assert_eq!(serde_json::to_value(ItemId::from("x1")).unwrap(), json!("x1"));
    }
}
