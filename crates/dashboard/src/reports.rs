use anyhow::{Context, Result};
use factcheck_core::{ReportRecord, ReportStatus};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTab {
    #[default]
    All,
    Verified,
    False,
    Uncertain,
}

impl StatusTab {
    pub fn admits(&self, status: ReportStatus) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Verified => status == ReportStatus::Verified,
            StatusTab::False => status == ReportStatus::False,
            StatusTab::Uncertain => status == ReportStatus::Uncertain,
        }
    }
}

impl fmt::Display for StatusTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            StatusTab::All => "all",
            StatusTab::Verified => "verified",
            StatusTab::False => "false",
            StatusTab::Uncertain => "uncertain",
        };
        write!(f, "{value}")
    }
}

impl FromStr for StatusTab {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusTab::All),
            "verified" => Ok(StatusTab::Verified),
            "false" => Ok(StatusTab::False),
            "uncertain" => Ok(StatusTab::Uncertain),
            other => Err(format!("unknown status tab: {other}")),
        }
    }
}

/// State of the report history page: selected tab plus search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportsView {
    pub tab: StatusTab,
    pub search: String,
}

impl ReportsView {
    pub fn new(tab: StatusTab, search: impl Into<String>) -> Self {
        Self {
            tab,
            search: search.into(),
        }
    }

    /// Records on the selected tab whose content or category contains the
    /// search term, in catalog order.
    pub fn visible<'a>(&self, records: &'a [ReportRecord]) -> Vec<&'a ReportRecord> {
        let needle = self.search.to_lowercase();
        records
            .iter()
            .filter(|record| self.tab.admits(record.status))
            .filter(|record| {
                record.content.to_lowercase().contains(&needle)
                    || record.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub verified: usize,
    pub false_count: usize,
    pub uncertain: usize,
    pub average_truth_score: u8,
}

impl ReportSummary {
    pub fn from_records(records: &[ReportRecord]) -> Self {
        let count = |status: ReportStatus| records.iter().filter(|r| r.status == status).count();
        let average_truth_score = if records.is_empty() {
            0
        } else {
            let sum: u32 = records.iter().map(|r| u32::from(r.truth_score)).sum();
            (f64::from(sum) / records.len() as f64).round() as u8
        };
        Self {
            total: records.len(),
            verified: count(ReportStatus::Verified),
            false_count: count(ReportStatus::False),
            uncertain: count(ReportStatus::Uncertain),
            average_truth_score,
        }
    }

    pub fn tab_count(&self, tab: StatusTab) -> usize {
        match tab {
            StatusTab::All => self.total,
            StatusTab::Verified => self.verified,
            StatusTab::False => self.false_count,
            StatusTab::Uncertain => self.uncertain,
        }
    }
}

/// `2024-01-15T10:30:00Z` -> `Jan 15, 2024, 10:30 AM` (UTC).
pub fn format_timestamp(timestamp: &str) -> Result<String> {
    let parsed = OffsetDateTime::parse(timestamp, &Rfc3339)
        .with_context(|| format!("invalid timestamp: {timestamp}"))?;
    let utc = parsed.to_offset(time::UtcOffset::UTC);
    let formatted = utc.format(format_description!(
        "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
    ))?;
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::report_history;

    fn ids(records: &[&ReportRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn default_view_shows_everything_in_order() {
        let records = report_history();
        let view = ReportsView::default();
        assert_eq!(ids(&view.visible(&records)), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn search_matches_category_case_insensitively() {
        let records = report_history();
        let view = ReportsView::new(StatusTab::All, "health");
        assert_eq!(ids(&view.visible(&records)), vec!["1"]);
    }

    #[test]
    fn search_matches_content_case_insensitively() {
        let records = report_history();
        let view = ReportsView::new(StatusTab::All, "GUARANTEED");
        assert_eq!(ids(&view.visible(&records)), vec!["4"]);
    }

    #[test]
    fn tab_and_search_combine() {
        let records = report_history();
        let view = ReportsView::new(StatusTab::Verified, "s");
        assert_eq!(ids(&view.visible(&records)), vec!["2", "3", "5"]);

        let view = ReportsView::new(StatusTab::False, "election");
        assert!(view.visible(&records).is_empty());

        let view = ReportsView::new(StatusTab::Uncertain, "");
        assert!(view.visible(&records).is_empty());
    }

    #[test]
    fn summary_of_catalog() {
        let summary = ReportSummary::from_records(&report_history());
        assert_eq!(
            summary,
            ReportSummary {
                total: 5,
                verified: 3,
                false_count: 2,
                uncertain: 0,
                average_truth_score: 60,
            }
        );
        assert_eq!(summary.tab_count(StatusTab::False), 2);
    }

    #[test]
    fn summary_of_nothing() {
        assert_eq!(ReportSummary::from_records(&[]), ReportSummary::default());
    }

    #[test]
    fn timestamps_render_like_the_history_page() {
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00Z").unwrap(),
            "Jan 15, 2024, 10:30 AM"
        );
        assert_eq!(
            format_timestamp("2024-01-14T16:45:00Z").unwrap(),
            "Jan 14, 2024, 04:45 PM"
        );
        assert!(format_timestamp("yesterday").is_err());
    }

    #[test]
    fn status_tab_parses() {
        assert_eq!("Verified".parse::<StatusTab>(), Ok(StatusTab::Verified));
        assert!("pending".parse::<StatusTab>().is_err());
    }
}
