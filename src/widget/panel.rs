use std::collections::HashMap;
use std::fmt;

use super::links::{graph_url, page_url};
use crate::filters::is_journal_page;
use crate::models::{Block, PageIdentity, SearchResult};
use crate::utils::sanitize_preview;

const PREVIEW_CHARS: usize = 80;

/// Blocks that share a page, in the order they were returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGroup<'a> {
    pub page: &'a PageIdentity,
    pub blocks: Vec<&'a Block>,
}

/// Group blocks by page name.
///
/// Groups are ordered by the first appearance of their page, blocks inside a
/// group keep their input order.
pub fn group_blocks_by_page(blocks: &[Block]) -> Vec<BlockGroup<'_>> {
    let mut groups: Vec<BlockGroup<'_>> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for block in blocks {
        match index_by_name.get(block.page.name.as_str()) {
            Some(&idx) => groups[idx].blocks.push(block),
            None => {
                index_by_name.insert(block.page.name.as_str(), groups.len());
                groups.push(BlockGroup { page: &block.page, blocks: vec![block] });
            }
        }
    }

    groups
}

/// Expanded widget body: header, page hits, then blocks grouped by page
#[derive(Debug, Clone)]
pub struct SidekickPanel<'a> {
    result: &'a SearchResult,
}

impl<'a> SidekickPanel<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        Self { result }
    }

    pub fn count(&self) -> usize {
        self.result.count()
    }

    fn page_title(page: &PageIdentity) -> String {
        let name = sanitize_preview(&page.name, PREVIEW_CHARS);
        match page.journal_date() {
            Some(date) => format!("{} (journal {})", name, date.format("%Y-%m-%d")),
            None if is_journal_page(page) => format!("{} (journal)", name),
            None => name,
        }
    }

    fn block_line(block: &Block) -> String {
        let preview = sanitize_preview(&block.content, PREVIEW_CHARS);
        let marker = block.marker.trim();
        if marker.is_empty() { preview } else { format!("{} {}", marker, preview) }
    }
}

impl fmt::Display for SidekickPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = &self.result.graph;
        writeln!(f, "Graph: {}", graph)?;

        if self.count() == 0 {
            return writeln!(
                f,
                "Nothing here, Do some research with Logseq! Go: {}",
                graph_url(graph)
            );
        }

        if !self.result.pages.is_empty() {
            writeln!(f)?;
            writeln!(f, "Pages")?;
            for page in &self.result.pages {
                writeln!(f, "  • {}  <{}>", Self::page_title(page), page_url(graph, &page.name))?;
            }
        }

        if !self.result.blocks.is_empty() {
            for group in group_blocks_by_page(&self.result.blocks) {
                writeln!(f)?;
                writeln!(f, "{}", Self::page_title(group.page))?;
                for block in group.blocks {
                    writeln!(f, "  - {}", Self::block_line(block))?;
                }
            }
        }

        Ok(())
    }
}
