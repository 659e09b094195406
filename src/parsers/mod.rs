//! Parsers for Logseq search responses
//!
//! # Error Handling Strategy
//!
//! Responses are decoded item by item so one bad hit doesn't hide the rest:
//!
//! - **Individual item failures**: A block or page that fails to decode (wrong types, missing
//!   `page`, invalid UUID) is logged with `tracing::warn!` and skipped.
//!
//! - **Catastrophic failure detection**: If more than 50% of the items in a list fail to decode,
//!   the whole response is rejected. The input is most likely not a Logseq search response.
//!
//! - **Null entries**: `null` items are dropped without counting as failures; the search API
//!   emits them for pages it could not resolve.
//!
//! - **Error propagation**: Uses `anyhow::Result` with context, consumers don't match on error
//!   types.

pub mod deserializers;
pub mod search_response;

pub use search_response::{ParsedResponse, parse_search_file, parse_search_response};
