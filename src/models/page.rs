use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimal identifying record for a Logseq page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageIdentity {
    pub id: i64,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_uuid"
    )]
    pub uuid: Option<String>,
    #[serde(rename = "originalName", default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// YYYYMMDD, only present on journal pages. `null` decodes as absent.
    #[serde(rename = "journal-day", default, skip_serializing_if = "Option::is_none")]
    pub journal_day: Option<i64>,
}

impl PageIdentity {
    /// Interpret `journal-day` as a calendar date for display.
    ///
    /// Returns `None` for regular pages and for values that are not a valid
    /// YYYYMMDD date. Journal detection never goes through this.
    pub fn journal_date(&self) -> Option<NaiveDate> {
        let day = self.journal_day?;
        if !(10_000_000..=99_999_999).contains(&day) {
            return None;
        }

        let year = i32::try_from(day / 10_000).ok()?;
        let month = ((day / 100) % 100) as u32;
        NaiveDate::from_ymd_opt(year, month, (day % 100) as u32)
    }
}

/// Anything that belongs to a page and can therefore be classified as a
/// journal or regular hit
pub trait HasPage {
    fn page(&self) -> &PageIdentity;
}

impl HasPage for PageIdentity {
    fn page(&self) -> &PageIdentity {
        self
    }
}

impl<T: HasPage + ?Sized> HasPage for &T {
    fn page(&self) -> &PageIdentity {
        (**self).page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(journal_day: Option<i64>) -> PageIdentity {
        PageIdentity {
            id: 1,
            name: "page".to_string(),
            uuid: None,
            original_name: None,
            journal_day,
        }
    }

    #[test]
    fn test_journal_date_valid() {
        let date = page(Some(20250606)).journal_date();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 6));
    }

    #[test]
    fn test_journal_date_absent() {
        assert!(page(None).journal_date().is_none());
    }

    #[test]
    fn test_journal_date_not_a_date() {
        assert!(page(Some(0)).journal_date().is_none());
        assert!(page(Some(20251340)).journal_date().is_none());
    }

    #[test]
    fn test_deserialize_journal_day_variants() {
        let regular: PageIdentity =
            serde_json::from_str(r#"{"id": 2742, "name": "Sifo Lakaw 鍾文觀"}"#).unwrap();
        assert!(regular.journal_day.is_none());

        let explicit_null: PageIdentity =
            serde_json::from_str(r#"{"id": 1, "name": "x", "journal-day": null}"#).unwrap();
        assert!(explicit_null.journal_day.is_none());

        let journal: PageIdentity = serde_json::from_str(
            r#"{"id": 809, "name": "Jun 6th, 2025", "originalName": "jun 6th, 2025", "journal-day": 20250606}"#,
        )
        .unwrap();
        assert_eq!(journal.journal_day, Some(20250606));
        assert_eq!(journal.original_name.as_deref(), Some("jun 6th, 2025"));
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let json = serde_json::to_string(&page(None)).unwrap();
        assert!(!json.contains("journal-day"));
        assert!(!json.contains("originalName"));

        let json = serde_json::to_string(&page(Some(20251010))).unwrap();
        assert!(json.contains(r#""journal-day":20251010"#));
    }
}
