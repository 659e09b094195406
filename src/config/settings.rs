use serde::{Deserialize, Serialize};

/// User preferences owned by the options page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidekickConfig {
    /// Logseq graph searched by the sidekick; `None` until configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_name: Option<String>,
    /// Hide hits that live on daily journal pages
    pub exclude_journal_pages: bool,
}

/// Partial settings change, unset fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub graph_name: Option<String>,
    pub exclude_journal_pages: Option<bool>,
}

impl SidekickConfig {
    pub fn has_graph(&self) -> bool {
        self.graph_name.as_deref().is_some_and(|g| !g.trim().is_empty())
    }

    /// Merge a partial update into these settings
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(graph_name) = update.graph_name {
            self.graph_name = Some(graph_name);
        }
        if let Some(exclude) = update.exclude_journal_pages {
            self.exclude_journal_pages = exclude;
        }
    }
}
