//! Fixed data the dashboard pages display. Nothing here is computed or stored.

use factcheck_core::{ContentKind, ReportRecord, ReportStatus};
use serde::Serialize;

pub fn report_history() -> Vec<ReportRecord> {
    vec![
        report(
            "1",
            "Breaking news about new medical breakthrough that doctors don't want you to know...",
            ContentKind::Text,
            15,
            "Health",
            ReportStatus::False,
            "2024-01-15T10:30:00Z",
            3,
        ),
        report(
            "2",
            "Local election results confirm official winner with 65% of votes...",
            ContentKind::Url,
            92,
            "Politics",
            ReportStatus::Verified,
            "2024-01-15T09:15:00Z",
            5,
        ),
        report(
            "3",
            "Scientific study shows climate change effects accelerating faster than predicted...",
            ContentKind::Text,
            88,
            "Science",
            ReportStatus::Verified,
            "2024-01-14T16:45:00Z",
            4,
        ),
        report(
            "4",
            "Cryptocurrency investment scheme promises 500% returns guaranteed...",
            ContentKind::Text,
            8,
            "Finance",
            ReportStatus::False,
            "2024-01-14T14:20:00Z",
            2,
        ),
        report(
            "5",
            "Weather forecast indicates severe storm approaching coastal areas...",
            ContentKind::Url,
            95,
            "Weather",
            ReportStatus::Verified,
            "2024-01-14T12:00:00Z",
            3,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    content: &str,
    kind: ContentKind,
    truth_score: u8,
    category: &str,
    status: ReportStatus,
    timestamp: &str,
    source_count: usize,
) -> ReportRecord {
    ReportRecord {
        id: id.to_string(),
        content: content.to_string(),
        kind,
        truth_score,
        category: category.to_string(),
        status,
        timestamp: timestamp.to_string(),
        source_count,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendingClaim {
    pub id: u32,
    pub claim: &'static str,
    pub category: &'static str,
    pub checks: u32,
    pub direction: TrendDirection,
    pub trend_value: i32, // percent change this week
    pub false_probability: u8,
    pub regions: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPoint {
    pub day: &'static str,
    pub misinformation: u32,
    pub verified: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub name: &'static str,
    pub percent: u8,
    pub count: u32,
}

/// A labelled figure shown as a tile; values are display strings.
#[derive(Debug, Clone, Serialize)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
}

pub fn trending_claims() -> Vec<TrendingClaim> {
    vec![
        TrendingClaim {
            id: 1,
            claim: "5G towers cause health problems and spread viruses",
            category: "Health",
            checks: 1247,
            direction: TrendDirection::Up,
            trend_value: 23,
            false_probability: 95,
            regions: &["North America", "Europe", "Asia"],
        },
        TrendingClaim {
            id: 2,
            claim: "Miracle supplement cures diabetes without medication",
            category: "Health",
            checks: 892,
            direction: TrendDirection::Up,
            trend_value: 18,
            false_probability: 98,
            regions: &["Global"],
        },
        TrendingClaim {
            id: 3,
            claim: "Government secretly controlling weather patterns",
            category: "Conspiracy",
            checks: 634,
            direction: TrendDirection::Down,
            trend_value: -12,
            false_probability: 89,
            regions: &["North America", "Australia"],
        },
        TrendingClaim {
            id: 4,
            claim: "Cryptocurrency investment guarantees 1000% returns",
            category: "Finance",
            checks: 578,
            direction: TrendDirection::Up,
            trend_value: 34,
            false_probability: 99,
            regions: &["Global"],
        },
        TrendingClaim {
            id: 5,
            claim: "Vaccines contain microchips for tracking",
            category: "Health",
            checks: 445,
            direction: TrendDirection::Down,
            trend_value: -8,
            false_probability: 97,
            regions: &["North America", "Europe"],
        },
    ]
}

pub fn weekly_detections() -> Vec<WeeklyPoint> {
    [
        ("Mon", 45, 234),
        ("Tue", 52, 267),
        ("Wed", 78, 189),
        ("Thu", 34, 298),
        ("Fri", 67, 245),
        ("Sat", 89, 176),
        ("Sun", 56, 203),
    ]
    .into_iter()
    .map(|(day, misinformation, verified)| WeeklyPoint {
        day,
        misinformation,
        verified,
    })
    .collect()
}

pub fn category_breakdown() -> Vec<CategoryShare> {
    [
        ("Health", 35, 1247),
        ("Politics", 28, 892),
        ("Finance", 20, 634),
        ("Technology", 10, 445),
        ("Science", 7, 289),
    ]
    .into_iter()
    .map(|(name, percent, count)| CategoryShare {
        name,
        percent,
        count,
    })
    .collect()
}

pub fn trend_headlines() -> Vec<StatTile> {
    vec![
        StatTile { label: "Active Threats", value: "47" },
        StatTile { label: "Global Checks", value: "12.4K" },
        StatTile { label: "Weekly Growth", value: "+23%" },
        StatTile { label: "Users Protected", value: "89.2K" },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentCheck {
    pub content: &'static str,
    pub score: u8,
    pub status: &'static str,
    pub time: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardTrend {
    pub claim: &'static str,
    pub checks: u32,
    pub direction: TrendDirection,
}

pub fn dashboard_stats() -> Vec<StatTile> {
    vec![
        StatTile { label: "Total Checks", value: "1,247" },
        StatTile { label: "Misinformation Detected", value: "89" },
        StatTile { label: "Verified True", value: "1,158" },
        StatTile { label: "Accuracy Rate", value: "94.8%" },
    ]
}

pub fn recent_checks() -> Vec<RecentCheck> {
    vec![
        RecentCheck {
            content: "Breaking: New vaccine side effects discovered...",
            score: 23,
            status: "False",
            time: "2 hours ago",
            category: "Health",
        },
        RecentCheck {
            content: "Local election results show unexpected winner...",
            score: 87,
            status: "True",
            time: "4 hours ago",
            category: "Politics",
        },
        RecentCheck {
            content: "Cryptocurrency investment guaranteed returns...",
            score: 15,
            status: "False",
            time: "6 hours ago",
            category: "Finance",
        },
    ]
}

/// The dashboard's own trending panel. Its figures are independent of the
/// trends page catalog.
pub fn dashboard_trending() -> Vec<DashboardTrend> {
    [
        ("5G towers cause health issues", 234, TrendDirection::Up),
        ("Miracle cure for diabetes discovered", 189, TrendDirection::Up),
        ("Election was rigged by foreign powers", 156, TrendDirection::Down),
    ]
    .into_iter()
    .map(|(claim, checks, direction)| DashboardTrend {
        claim,
        checks,
        direction,
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize)]
pub struct WarningSign {
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Misconception {
    pub misconception: &'static str,
    pub reality: &'static str,
}

pub fn warning_signs() -> Vec<WarningSign> {
    vec![
        WarningSign {
            title: "Sensational Headlines",
            description: "Look for excessive use of capital letters, emotional language, or phrases like 'SHOCKING' or 'DOCTORS HATE THIS'",
            example: "SHOCKING: This ONE WEIRD TRICK Doctors DON'T Want You to Know!",
            severity: Severity::High,
        },
        WarningSign {
            title: "Missing Sources",
            description: "Credible information always cites reliable sources. Be wary of claims without proper attribution",
            example: "Studies show that 90% of people agree... (no study mentioned)",
            severity: Severity::High,
        },
        WarningSign {
            title: "Emotional Manipulation",
            description: "Content designed to trigger strong emotions rather than present facts objectively",
            example: "If you don't share this, you don't care about children's safety!",
            severity: Severity::Medium,
        },
        WarningSign {
            title: "Confirmation Bias Appeal",
            description: "Information that only confirms what you already believe without presenting counterarguments",
            example: "Finally, someone is telling the TRUTH about [your existing belief]",
            severity: Severity::Medium,
        },
        WarningSign {
            title: "Urgency Pressure",
            description: "Creating false urgency to prevent critical thinking and fact-checking",
            example: "Share before they DELETE this! Limited time only!",
            severity: Severity::Medium,
        },
        WarningSign {
            title: "Anonymous Experts",
            description: "Claims attributed to unnamed 'experts', 'studies', or 'doctors' without specifics",
            example: "Leading scientists say..., Top doctors recommend...",
            severity: Severity::Low,
        },
    ]
}

pub fn verification_steps() -> Vec<VerificationStep> {
    [
        (
            "Check the Source",
            "Verify the credibility of the original source. Look for established news organizations, academic institutions, or government agencies.",
        ),
        (
            "Cross-Reference",
            "Look for the same information from multiple reliable sources. If only one source reports it, be skeptical.",
        ),
        (
            "Check the Date",
            "Ensure the information is current and hasn't been taken out of context from an older story.",
        ),
        (
            "Examine Evidence",
            "Look for concrete evidence, data, and expert quotes. Be wary of anecdotal evidence presented as fact.",
        ),
        (
            "Use Fact-Checkers",
            "Consult established fact-checking websites like Snopes, PolitiFact, or FactCheck.org.",
        ),
        (
            "Trust Your Instincts",
            "If something seems too good (or bad) to be true, it probably is. Take time to verify before sharing.",
        ),
    ]
    .into_iter()
    .zip(1u8..)
    .map(|((title, description), step)| VerificationStep {
        step,
        title,
        description,
    })
    .collect()
}

pub fn misconceptions() -> Vec<Misconception> {
    vec![
        Misconception {
            misconception: "If it's online, it must be true",
            reality: "Anyone can publish content online without verification. Always check the source and cross-reference.",
        },
        Misconception {
            misconception: "Shared by many people = must be accurate",
            reality: "Misinformation often spreads faster than facts because it's designed to be engaging and shareable.",
        },
        Misconception {
            misconception: "Professional-looking websites are always credible",
            reality: "Modern tools make it easy to create professional-looking fake news sites. Check the about page and domain registration.",
        },
        Misconception {
            misconception: "Videos and images don't lie",
            reality: "Deepfakes, manipulated images, and out-of-context media are increasingly common and sophisticated.",
        },
    ]
}
