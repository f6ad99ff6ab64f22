//! Catalog Search
//!
//! Case-insensitive substring filter over item titles.

use crate::models::CatalogItem;

/// Lowercased query, built once per keystroke
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, title: &str) -> bool {
        self.is_empty() || title.to_lowercase().contains(&self.needle)
    }
}

/// Items whose title contains `query`, in catalog order. Empty query keeps everything.
pub fn filter_catalog<'a>(items: &'a [CatalogItem], query: &str) -> Vec<&'a CatalogItem> {
    let query = SearchQuery::new(query);
    items.iter().filter(|item| query.matches(&item.title)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(1, "Air Max", 120.0),
            CatalogItem::new(2, "Classic Run", 80.0),
        ]
    }

    fn titles(items: Vec<&CatalogItem>) -> Vec<&str> {
        items.into_iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_query_matches_case_insensitively() {
        let items = catalog();
        assert_eq!(titles(filter_catalog(&items, "air")), vec!["Air Max"]);
        assert_eq!(titles(filter_catalog(&items, "RUN")), vec!["Classic Run"]);
    }

    #[test]
    fn test_empty_query_keeps_order() {
        let items = catalog();
        assert_eq!(titles(filter_catalog(&items, "")), vec!["Air Max", "Classic Run"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let items = catalog();
        assert!(filter_catalog(&items, "zzz").is_empty());
    }

    #[test]
    fn test_source_is_untouched() {
        let items = catalog();
        let before = items.clone();
        let _ = filter_catalog(&items, "classic");
        assert_eq!(items, before);
    }

    #[test]
    fn test_non_ascii_titles() {
        let items = vec![CatalogItem::new(1, "Кроссовки Nike", 10.0)];
        assert_eq!(filter_catalog(&items, "кросс").len(), 1);
    }
}
