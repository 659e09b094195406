//! Persisted sidekick settings
//!
//! Settings live in a single JSON file written atomically (temp file + rename):
//!
//! - Linux: `~/.config/logseq-sidekick/config.json`
//! - macOS: `~/Library/Application Support/logseq-sidekick/config.json`
//! - Windows: `%APPDATA%\logseq-sidekick\config.json`
//!
//! `$LOGSEQ_SIDEKICK_CONFIG` overrides the location. Code that needs settings
//! takes a [`ConfigStore`] instead of touching the file directly.

pub mod settings;
pub mod store;

pub use settings::{ConfigUpdate, SidekickConfig};
pub use store::{ConfigStore, FileConfigStore, MemoryConfigStore};
