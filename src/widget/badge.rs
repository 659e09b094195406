use std::fmt;

/// What the floating button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeContent {
    /// No graph configured yet
    NeedsConfiguration,
    /// Graph configured, nothing matched
    Search,
    Count(usize),
}

impl BadgeContent {
    pub fn new(count: usize, has_graph: bool) -> Self {
        if !has_graph {
            BadgeContent::NeedsConfiguration
        } else if count == 0 {
            BadgeContent::Search
        } else {
            BadgeContent::Count(count)
        }
    }

    /// Accessible label for screen readers
    pub fn label(&self) -> String {
        match self {
            BadgeContent::NeedsConfiguration => "Logseq: Configuration needed".to_string(),
            BadgeContent::Search => "Logseq: Search your graph".to_string(),
            BadgeContent::Count(count) => format!("Logseq results: {} items", count),
        }
    }
}

impl fmt::Display for BadgeContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeContent::NeedsConfiguration => write!(f, "⚠️"),
            BadgeContent::Search => write!(f, "🔍"),
            BadgeContent::Count(count) => write!(f, "{}", count),
        }
    }
}

/// Floating button state: the badge plus whether the panel is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingButton {
    pub content: BadgeContent,
    pub is_open: bool,
}

impl FloatingButton {
    pub fn new(count: usize, has_graph: bool) -> Self {
        Self { content: BadgeContent::new(count, has_graph), is_open: false }
    }

    /// Click, Enter and Space all toggle the panel
    pub fn activate(&mut self) {
        self.is_open = !self.is_open;
    }
}

impl fmt::Display for FloatingButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_open { "▾" } else { "▸" };
        write!(f, "[{} {}] {}", marker, self.content, self.content.label())
    }
}
