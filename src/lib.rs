//! Logseq Sidekick - Logseq search results with journal pages optionally hidden
//!
//! This library models the responses of the Logseq search API and the state of
//! the floating sidekick widget that shows them. It supports:
//!
//! - Decoding search responses (full results, server envelopes, bare block lists)
//! - Excluding hits that live on daily journal pages
//! - Persisting the user's preferences behind a [`config::ConfigStore`]
//! - Rendering the badge, grouped block list and settings panel as text
//!
//! # Example
//!
//! ```
//! use logseq_sidekick::{filter_results, is_journal_page, parse_search_response};
//!
//! let response = r#"[
//!     {"uuid": "6838ddea-4496-48f4-8724-94050c2c2190", "content": "sifolakaw@gmail.com",
//!      "page": {"id": 2742, "name": "Sifo Lakaw 鍾文觀"}},
//!     {"uuid": "6842357c-03c2-48ef-9cce-5ff933e20f20", "content": "Contact: Sifo Lakaw",
//!      "page": {"id": 809, "name": "Jun 6th, 2025", "journal-day": 20250606}}
//! ]"#;
//!
//! let blocks = parse_search_response(response)?.result.blocks;
//! assert!(is_journal_page(&blocks[1]));
//!
//! let visible = filter_results(blocks, true);
//! assert_eq!(visible.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod filters;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod utils;
pub mod widget;

// Re-export commonly used types
pub use config::SidekickConfig;
pub use filters::{JournalStats, filter_results, filter_search_result, is_journal_page};
pub use models::{Block, HasPage, PageIdentity, SearchResult};
pub use parsers::{parse_search_file, parse_search_response};
pub use utils::format_path_with_tilde;
