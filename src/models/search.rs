use serde::{Deserialize, Serialize};

use super::block::Block;
use super::page::PageIdentity;

/// Blocks and pages matching a query in a single graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub pages: Vec<PageIdentity>,
    #[serde(default)]
    pub graph: String,
}

impl SearchResult {
    /// Number of hits shown on the floating button
    pub fn count(&self) -> usize {
        self.pages.len() + self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
