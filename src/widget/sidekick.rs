use anyhow::Result;

use super::badge::FloatingButton;
use super::messages::{MessageSender, SidekickMessage};
use super::panel::SidekickPanel;
use crate::config::SidekickConfig;
use crate::filters::{JournalStats, filter_search_result};
use crate::models::SearchResult;

/// Widget state for one search: the raw hits, the hits left after applying
/// the user's preferences, and the floating button
pub struct Sidekick {
    raw: SearchResult,
    visible: SearchResult,
    config: SidekickConfig,
    button: FloatingButton,
    sender: MessageSender,
    /// The graph name was filled in from settings, not the response
    graph_from_config: bool,
}

impl Sidekick {
    pub fn new(mut result: SearchResult, config: SidekickConfig, sender: MessageSender) -> Self {
        let graph_from_config = result.graph.is_empty();
        if graph_from_config {
            result.graph = configured_graph(&config);
        }

        let visible = filter_search_result(result.clone(), config.exclude_journal_pages);
        let button = FloatingButton::new(visible.count(), has_graph(&result));
        Self { raw: result, visible, config, button, sender, graph_from_config }
    }

    pub fn visible(&self) -> &SearchResult {
        &self.visible
    }

    pub fn button(&self) -> &FloatingButton {
        &self.button
    }

    pub fn panel(&self) -> SidekickPanel<'_> {
        SidekickPanel::new(&self.visible)
    }

    /// Journal breakdown of the unfiltered blocks
    pub fn stats(&self) -> JournalStats {
        JournalStats::from_items(&self.raw.blocks)
    }

    /// Hits removed by the current preferences
    pub fn hidden_count(&self) -> usize {
        self.raw.count() - self.visible.count()
    }

    pub fn toggle_panel(&mut self) {
        self.button.activate();
    }

    /// Gear icon
    pub fn open_options(&self) -> Result<()> {
        self.sender.send(SidekickMessage::OpenOptions)
    }

    pub fn handle_message(&mut self, message: &SidekickMessage) {
        if let SidekickMessage::SettingsChanged(config) = message {
            self.apply_config(config.clone());
        }
    }

    fn apply_config(&mut self, config: SidekickConfig) {
        if self.graph_from_config {
            self.raw.graph = configured_graph(&config);
        }
        let is_open = self.button.is_open;
        self.visible = filter_search_result(self.raw.clone(), config.exclude_journal_pages);
        self.button = FloatingButton::new(self.visible.count(), has_graph(&self.raw));
        self.button.is_open = is_open;
        self.config = config;
    }

    pub fn config(&self) -> &SidekickConfig {
        &self.config
    }
}

fn has_graph(result: &SearchResult) -> bool {
    !result.graph.trim().is_empty()
}

fn configured_graph(config: &SidekickConfig) -> String {
    match &config.graph_name {
        Some(graph) if config.has_graph() => graph.clone(),
        _ => String::new(),
    }
}
