//! Page snapshot type.

/// A read-only snapshot of one page of records.
///
/// Produced fresh on every [`RecordStore::paginated`](crate::RecordStore::paginated)
/// call; it owns a copy of the slice and has no lifecycle of its own.
///
/// `total_count` is always the full collection size at the time of the
/// query, independent of which page was requested. A page past the end of
/// the data has empty `records` and the correct `total_count` - that is a
/// valid result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The records on this page, in insertion order. At most `page_size`
    /// entries.
    pub records: Vec<T>,
    /// The full collection size before pagination.
    pub total_count: usize,
}

impl<T> Page<T> {
    /// Returns the number of records on this page (not the total count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_is_page_len_not_total() {
        let page = Page {
            records: vec![1, 2],
            total_count: 5,
        };
        assert_eq!(page.len(), 2);
        assert!(!page.is_empty());
    }

    #[test]
    fn past_the_end_page_is_empty() {
        let page: Page<i32> = Page {
            records: Vec::new(),
            total_count: 5,
        };
        assert!(page.is_empty());
        assert_eq!(page.total_count, 5);
    }
}
