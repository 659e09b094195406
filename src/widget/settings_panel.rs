use std::fmt;

use anyhow::Result;

use super::messages::{MessageSender, SidekickMessage};
use crate::config::{ConfigStore, ConfigUpdate, SidekickConfig};

const EXCLUDE_JOURNALS_LABEL: &str = "Exclude journal pages from search results";
const EXCLUDE_JOURNALS_HELP: &str = "When enabled, search results from daily journal pages will be hidden.\nThis can significantly reduce clutter when searching.";

/// "Search Settings" section of the options page
pub struct SearchSettings<S: ConfigStore> {
    store: S,
    sender: MessageSender,
    config: SidekickConfig,
}

impl<S: ConfigStore> SearchSettings<S> {
    pub fn load(store: S, sender: MessageSender) -> Result<Self> {
        let config = store.load()?;
        Ok(Self { store, sender, config })
    }

    pub fn config(&self) -> &SidekickConfig {
        &self.config
    }

    pub fn exclude_journal_pages(&self) -> bool {
        self.config.exclude_journal_pages
    }

    /// Persist the checkbox value and tell listeners about it
    pub fn set_exclude_journal_pages(&mut self, exclude: bool) -> Result<()> {
        self.config = self
            .store
            .update(ConfigUpdate { exclude_journal_pages: Some(exclude), ..Default::default() })?;
        tracing::info!(exclude, "Updated journal page preference");
        self.sender.send(SidekickMessage::SettingsChanged(self.config.clone()))
    }

    pub fn toggle_exclude_journal_pages(&mut self) -> Result<()> {
        self.set_exclude_journal_pages(!self.exclude_journal_pages())
    }
}

impl<S: ConfigStore> fmt::Display for SearchSettings<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.config.exclude_journal_pages { "x" } else { " " };
        writeln!(f, "Search Settings")?;
        writeln!(f, "[{}] {}", check, EXCLUDE_JOURNALS_LABEL)?;
        for line in EXCLUDE_JOURNALS_HELP.lines() {
            writeln!(f, "    {}", line)?;
        }
        Ok(())
    }
}
