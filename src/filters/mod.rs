pub mod journal;
pub mod stats;

pub use journal::{filter_results, filter_search_result, is_journal_page};
pub use stats::JournalStats;
