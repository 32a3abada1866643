//! Paged response containers.
//!
//! ReportPortal list endpoints return server-paged bodies of the form
//! `{"content": [...], "page": {"number": 1, "size": 20, "totalElements": 42,
//! "totalPages": 3}}`. [`Page`] models that container; the requested page is
//! selected with [`Paging`](crate::Paging) on the filter specification.

use serde::{Deserialize, Serialize};

/// A page of results from a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// The items on this page.
    #[serde(default)]
    pub content: Vec<T>,
    /// Server-side pagination details.
    #[serde(default)]
    pub page: PageInfo,
}

/// Pagination details reported by the server.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page number (1-indexed).
    #[serde(default)]
    pub number: u32,
    /// Number of items per page.
    #[serde(default)]
    pub size: u32,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Whether pages remain after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page.number < self.page.total_pages
    }

    /// Map the items to a different type, keeping pagination details.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserializes_wire_layout() {
        let json = r#"{
            "content": [1, 2, 3],
            "page": {"number": 1, "size": 3, "totalElements": 7, "totalPages": 3}
        }"#;

        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.page.number, 1);
        assert_eq!(page.page.size, 3);
        assert_eq!(page.page.total_elements, 7);
        assert_eq!(page.page.total_pages, 3);
    }

    #[test]
    fn test_page_items_do_not_need_default() {
        // Entity types are not required to implement Default
        #[derive(Debug, Deserialize)]
        struct Entry {
            id: String,
        }

        let page: Page<Entry> = serde_json::from_str(
            r#"{"content": [{"id": "a"}, {"id": "b"}], "page": {"number": 1, "size": 2, "totalElements": 2, "totalPages": 1}}"#,
        )
        .unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.content[0].id, "a");
        assert_eq!(page.content[1].id, "b");
    }

    #[test]
    fn test_page_defaults_when_fields_missing() {
        let page: Page<i32> = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.page.total_elements, 0);
        assert!(!page.has_more());
    }

    #[test]
    fn test_has_more() {
        let mut page: Page<i32> = serde_json::from_str(
            r#"{"content": [], "page": {"number": 1, "size": 10, "totalElements": 25, "totalPages": 3}}"#,
        )
        .unwrap();
        assert!(page.has_more());

        page.page.number = 3;
        assert!(!page.has_more());
    }

    #[test]
    fn test_page_map_keeps_pagination() {
        let page: Page<i32> = serde_json::from_str(
            r#"{"content": [1, 2, 3], "page": {"number": 2, "size": 3, "totalElements": 6, "totalPages": 2}}"#,
        )
        .unwrap();

        let mapped = page.map(|x| x * 2);
        assert_eq!(mapped.content, vec![2, 4, 6]);
        assert_eq!(mapped.page.number, 2);
    }

    #[test]
    fn test_page_iteration() {
        let page: Page<i32> = serde_json::from_str(r#"{"content": [5, 6]}"#).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.iter().sum::<i32>(), 11);
        assert_eq!((&page).into_iter().count(), 2);
        assert_eq!(page.into_iter().collect::<Vec<_>>(), vec![5, 6]);
    }
}
