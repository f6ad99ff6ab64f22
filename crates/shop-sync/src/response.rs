//! Collection Response Decoding
//!
//! Listings arrive either as a bare JSON array or as a paginated envelope
//! (`{"count": .., "next": .., "previous": .., "results": [..]}`). The shape
//! is decided once here; callers only ever see the decoded variant.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ListResponse<T> {
    Array(Vec<T>),
    Envelope {
        results: Vec<T>,
        count: Option<u64>,
        next: Option<String>,
        previous: Option<String>,
    },
    /// Anything else, with a short description of what arrived
    Unrecognized(String),
}

/// Shape summary without the items, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Array { len: usize },
    Envelope { len: usize, count: Option<u64> },
    Unrecognized,
}

impl<T: DeserializeOwned> ListResponse<T> {
    pub fn decode(body: Value) -> Self {
        match body {
            Value::Array(values) => match decode_items(values) {
                Ok(items) => ListResponse::Array(items),
                Err(reason) => ListResponse::Unrecognized(reason),
            },
            Value::Object(mut map) => {
                let Some(Value::Array(values)) = map.remove("results") else {
                    return ListResponse::Unrecognized("object without a results array".to_string());
                };
                match decode_items(values) {
                    Ok(results) => ListResponse::Envelope {
                        results,
                        count: map.get("count").and_then(Value::as_u64),
                        next: map.get("next").and_then(Value::as_str).map(str::to_string),
                        previous: map.get("previous").and_then(Value::as_str).map(str::to_string),
                    },
                    Err(reason) => ListResponse::Unrecognized(reason),
                }
            }
            other => ListResponse::Unrecognized(format!("{} body", value_kind(&other))),
        }
    }
}

impl<T> ListResponse<T> {
    pub fn shape(&self) -> ResponseShape {
        match self {
            ListResponse::Array(items) => ResponseShape::Array { len: items.len() },
            ListResponse::Envelope { results, count, .. } => ResponseShape::Envelope {
                len: results.len(),
                count: *count,
            },
            ListResponse::Unrecognized(_) => ResponseShape::Unrecognized,
        }
    }

    /// Items in server order; unrecognized shapes are a format error
    pub fn into_items(self) -> ApiResult<Vec<T>> {
        match self {
            ListResponse::Array(items) => Ok(items),
            ListResponse::Envelope { results, .. } => Ok(results),
            ListResponse::Unrecognized(reason) => Err(ApiError::Format(reason)),
        }
    }
}

fn decode_items<T: DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>, String> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| format!("item {}: {}", index, e))
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogItem;
    use serde_json::json;

    fn titles(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_bare_array_keeps_order() {
        let decoded = ListResponse::<CatalogItem>::decode(json!([
            {"id": 2, "title": "B"},
            {"id": 1, "title": "A"}
        ]));
        assert_eq!(decoded.shape(), ResponseShape::Array { len: 2 });
        assert_eq!(titles(&decoded.into_items().unwrap()), vec!["B", "A"]);
    }

    #[test]
    fn test_envelope_uses_results() {
        let decoded = ListResponse::<CatalogItem>::decode(json!({
            "count": 40,
            "next": "http://localhost:8000/api/sneakers/?page=2",
            "previous": null,
            "results": [{"id": 1, "title": "A"}, {"id": 3, "title": "C"}]
        }));
        match &decoded {
            ListResponse::Envelope { count, next, previous, .. } => {
                assert_eq!(*count, Some(40));
                assert!(next.is_some());
                assert!(previous.is_none());
            }
            other => panic!("expected envelope, got {:?}", other),
        }
        assert_eq!(titles(&decoded.into_items().unwrap()), vec!["A", "C"]);
    }

    #[test]
    fn test_other_shapes_are_format_errors() {
        for body in [json!({"items": []}), json!("oops"), json!(null), json!(42)] {
            let decoded = ListResponse::<CatalogItem>::decode(body);
            assert_eq!(decoded.shape(), ResponseShape::Unrecognized);
            assert!(decoded.into_items().unwrap_err().is_format());
        }
    }

    #[test]
    fn test_undecodable_item_is_unrecognized() {
        let decoded = ListResponse::<CatalogItem>::decode(json!([{"title": "no id"}]));
        assert!(matches!(decoded, ListResponse::Unrecognized(ref reason) if reason.starts_with("item 0")));
    }
}
