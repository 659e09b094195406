use crate::models::{HasPage, SearchResult};

/// A hit is a journal hit iff its page carries `journal-day`, whatever the value
pub fn is_journal_page<T: HasPage + ?Sized>(item: &T) -> bool {
    item.page().journal_day.is_some()
}

/// Drop journal hits when `exclude_journals` is set.
///
/// When disabled the input vector is handed back untouched (same allocation,
/// same order). When enabled the surviving items keep their relative order.
pub fn filter_results<T: HasPage>(mut items: Vec<T>, exclude_journals: bool) -> Vec<T> {
    if !exclude_journals {
        return items;
    }

    let before = items.len();
    items.retain(|item| !is_journal_page(item));
    tracing::debug!(before, after = items.len(), "Excluded journal pages");

    items
}

/// Apply [`filter_results`] to both the blocks and the pages of a result
pub fn filter_search_result(result: SearchResult, exclude_journals: bool) -> SearchResult {
    SearchResult {
        blocks: filter_results(result.blocks, exclude_journals),
        pages: filter_results(result.pages, exclude_journals),
        graph: result.graph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, PageIdentity};

    fn create_test_block(uuid: &str, page_name: &str, journal_day: Option<i64>) -> Block {
        Block {
            uuid: uuid.to_string(),
            content: format!("content of {}", uuid),
            page: PageIdentity {
                id: 1,
                name: page_name.to_string(),
                uuid: None,
                original_name: Some(page_name.to_lowercase()),
                journal_day,
            },
            html: String::new(),
            format: "markdown".to_string(),
            marker: String::new(),
            priority: String::new(),
            properties: None,
            tags: None,
            status: None,
        }
    }

    fn mixed_blocks() -> Vec<Block> {
        vec![
            create_test_block("a", "Rust", None),
            create_test_block("b", "Jun 6th, 2025", Some(20250606)),
            create_test_block("c", "Logseq", None),
            create_test_block("d", "Oct 10th, 2025", Some(20251010)),
            create_test_block("e", "Rust", None),
        ]
    }

    fn uuids(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.uuid.as_str()).collect()
    }

    #[test]
    fn test_is_journal_page_presence_only() {
        assert!(is_journal_page(&create_test_block("a", "Jun 6th, 2025", Some(20250606))));
        assert!(is_journal_page(&create_test_block("b", "Oct 10th, 2025", Some(20251010))));
        assert!(is_journal_page(&create_test_block("c", "zero", Some(0))));
        assert!(!is_journal_page(&create_test_block("d", "Rust", None)));
    }

    #[test]
    fn test_is_journal_page_on_page_identity() {
        let block = create_test_block("a", "Jun 6th, 2025", Some(20250606));
        assert!(is_journal_page(&block.page));
        assert!(is_journal_page(&&block));
    }

    #[test]
    fn test_filter_disabled_returns_same_vector() {
        let blocks = mixed_blocks();
        let ptr = blocks.as_ptr();
        let expected = blocks.clone();

        let result = filter_results(blocks, false);
        assert_eq!(result.as_ptr(), ptr);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_filter_enabled_preserves_order() {
        let result = filter_results(mixed_blocks(), true);
        assert_eq!(uuids(&result), vec!["a", "c", "e"]);
        assert!(result.iter().all(|b| !is_journal_page(b)));
    }

    #[test]
    fn test_filter_enabled_removed_items_are_journals() {
        let original = mixed_blocks();
        let kept = filter_results(original.clone(), true);
        for block in &original {
            let was_kept = kept.iter().any(|k| k.uuid == block.uuid);
            assert_eq!(was_kept, !is_journal_page(block));
        }
    }

    #[test]
    fn test_filter_idempotent() {
        let once = filter_results(mixed_blocks(), true);
        let twice = filter_results(once.clone(), true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_all_journals() {
        let blocks = vec![
            create_test_block("a", "Jun 6th, 2025", Some(20250606)),
            create_test_block("b", "zero", Some(0)),
        ];
        assert!(filter_results(blocks, true).is_empty());
    }

    #[test]
    fn test_filter_no_journals() {
        let blocks = vec![create_test_block("a", "Rust", None), create_test_block("b", "Go", None)];
        assert_eq!(filter_results(blocks.clone(), true), blocks);
    }

    #[test]
    fn test_filter_empty() {
        assert!(filter_results(Vec::<Block>::new(), true).is_empty());
        assert!(filter_results(Vec::<Block>::new(), false).is_empty());
    }

    #[test]
    fn test_filter_borrowed_items() {
        let blocks = mixed_blocks();
        let refs: Vec<&Block> = blocks.iter().collect();
        let kept = filter_results(refs, true);
        assert_eq!(kept.len(), 3);
        assert!(std::ptr::eq(kept[0], &blocks[0]));
    }

    #[test]
    fn test_filter_search_result_blocks_and_pages() {
        let blocks = mixed_blocks();
        let pages = blocks.iter().map(|b| b.page.clone()).collect();
        let result = SearchResult { blocks, pages, graph: "work".to_string() };

        let filtered = filter_search_result(result.clone(), true);
        assert_eq!(filtered.blocks.len(), 3);
        assert_eq!(filtered.pages.len(), 3);
        assert_eq!(filtered.graph, "work");

        let unfiltered = filter_search_result(result.clone(), false);
        assert_eq!(unfiltered, result);
    }
}
