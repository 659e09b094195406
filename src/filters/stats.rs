use super::journal::is_journal_page;
use crate::models::HasPage;

/// Journal vs regular breakdown of a set of hits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JournalStats {
    pub total: usize,
    pub journal: usize,
    pub regular: usize,
}

impl JournalStats {
    pub fn from_items<T: HasPage>(items: &[T]) -> Self {
        let total = items.len();
        let journal = items.iter().filter(|item| is_journal_page(*item)).count();
        Self { total, journal, regular: total - journal }
    }

    /// Share of journal hits, rounded to the nearest whole percent
    pub fn journal_percent(&self) -> u32 {
        percent(self.journal, self.total)
    }

    pub fn regular_percent(&self) -> u32 {
        percent(self.regular, self.total)
    }

    /// Hits that disappear when journal pages are excluded
    pub fn hidden_when_excluding(&self) -> usize {
        self.journal
    }
}

fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
