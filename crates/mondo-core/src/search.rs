// crates/mondo-core/src/search.rs

//! Substring search over the flat country/destination list.

use crate::model::{SearchItem, SearchKind};
use crate::text::fold_key;
use crate::traits::NameMatch;

/// Results shown under the search box.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Queries shorter than this (in characters, after trimming) match nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// Filter `items` by a case- and accent-insensitive substring of the name,
/// keeping list order and at most `limit` hits.
pub fn filter_items<'a>(items: &'a [SearchItem], query: &str, limit: usize) -> Vec<&'a SearchItem> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let q = fold_key(query);
    items
        .iter()
        .filter(|item| item.name_contains_folded(&q))
        .take(limit)
        .collect()
}

/// The search list plus lookups by slug.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
}

impl SearchIndex {
    pub fn new(items: Vec<SearchItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self, query: &str, limit: usize) -> Vec<&SearchItem> {
        filter_items(&self.items, query, limit)
    }

    /// First item of `kind` with this slug.
    pub fn find(&self, kind: SearchKind, slug: &str) -> Option<&SearchItem> {
        self.items.iter().find(|i| i.kind == kind && i.slug == slug)
    }
}

impl From<Vec<SearchItem>> for SearchIndex {
    fn from(items: Vec<SearchItem>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SearchIndex {
        SearchIndex::new(vec![
            SearchItem::country("Thailand"),
            SearchItem::destination("bangkok"),
            SearchItem::destination("koh_samui"),
            SearchItem::country("Mexico"),
            SearchItem::destination("cancun"),
            SearchItem::destination("mexico_city"),
        ])
    }

    fn names(hits: Vec<&SearchItem>) -> Vec<&str> {
        hits.into_iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn short_queries_match_nothing() {
        assert!(index().filter("", 10).is_empty());
        assert!(index().filter(" m ", 10).is_empty());
    }

    #[test]
    fn match_is_case_and_accent_insensitive() {
        assert_eq!(names(index().filter("MEX", 10)), vec!["Mexico", "Mexico City"]);
        assert_eq!(names(index().filter("cancún", 10)), vec!["Cancun"]);
    }

    #[test]
    fn limit_caps_results() {
        assert_eq!(names(index().filter("an", 1)), vec!["Thailand"]);
    }

    #[test]
    fn find_by_kind_and_slug() {
        let idx = index();
        assert!(idx.find(SearchKind::Country, "mexico").is_some());
        assert!(idx.find(SearchKind::Destination, "mexico").is_none());
        assert_eq!(
            idx.find(SearchKind::Destination, "koh_samui").map(|i| i.name.as_str()),
            Some("Koh Samui")
        );
    }
}
