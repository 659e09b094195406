//! Data models for Logseq search responses.
//!
//! - [`PageIdentity`] - The page a hit belongs to (carries the `journal-day` marker)
//! - [`Block`] - A block hit with its text content
//! - [`PageContent`] - A page-content hit
//! - [`SearchResult`] - Blocks and pages returned for one graph
//!
//! Field names follow the JSON emitted by the Logseq search API (`originalName`,
//! `journal-day`). UUID fields are validated by the custom deserializers in
//! `parsers::deserializers`.

pub mod block;
pub mod page;
pub mod search;

pub use block::{Block, PageContent};
pub use page::{HasPage, PageIdentity};
pub use search::SearchResult;
