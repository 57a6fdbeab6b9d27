use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClassifyError;

/// Image file extensions the upload flow accepts.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Url,
    Image,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Url => "url",
            ContentKind::Image => "image",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(ContentKind::Text),
            "url" => Ok(ContentKind::Url),
            "image" => Ok(ContentKind::Image),
            other => Err(format!("unknown content kind: {other}")),
        }
    }
}

/// Content handed to a classifier. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Submission {
    pub content: String,
    pub kind: ContentKind,
}

impl Submission {
    pub fn new(content: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, ContentKind::Text)
    }

    pub fn url(content: impl Into<String>) -> Self {
        Self::new(content, ContentKind::Url)
    }

    /// Builds the descriptor an uploaded image is checked under.
    pub fn image(file_name: &str) -> Result<Self, ClassifyError> {
        let name = file_name.trim();
        let supported = name
            .rsplit_once('.')
            .map(|(stem, ext)| {
                !stem.is_empty()
                    && IMAGE_EXTENSIONS
                        .iter()
                        .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false);
        if !supported {
            return Err(ClassifyError::UnsupportedImage(name.to_string()));
        }
        Ok(Self::new(
            format!("Image analysis of {name}"),
            ContentKind::Image,
        ))
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceCitation {
    pub title: String,
    pub url: String,
    pub reliability: String, // e.g. "High"
}

impl SourceCitation {
    pub fn new(title: &str, url: &str, reliability: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            reliability: reliability.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub truth_score: u8, // 0..=100
    pub explanation: String,
    pub sources: Vec<SourceCitation>,
    pub category: String,
    pub confidence_label: String,
}

impl Verdict {
    pub fn band(&self) -> TruthBand {
        TruthBand::from_score(self.truth_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TruthBand {
    LikelyTrue,
    Uncertain,
    LikelyFalse,
}

impl TruthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => TruthBand::LikelyTrue,
            40..=69 => TruthBand::Uncertain,
            _ => TruthBand::LikelyFalse,
        }
    }
}

impl fmt::Display for TruthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TruthBand::LikelyTrue => "likely true",
            TruthBand::Uncertain => "uncertain",
            TruthBand::LikelyFalse => "likely false",
        };
        write!(f, "{value}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Verified,
    False,
    Uncertain,
}

impl ReportStatus {
    pub fn from_score(score: u8) -> Self {
        match TruthBand::from_score(score) {
            TruthBand::LikelyTrue => ReportStatus::Verified,
            TruthBand::Uncertain => ReportStatus::Uncertain,
            TruthBand::LikelyFalse => ReportStatus::False,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Verified => "verified",
            ReportStatus::False => "false",
            ReportStatus::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportRecord {
    pub id: String,
    pub content: String,
    pub kind: ContentKind,
    pub truth_score: u8,
    pub category: String,
    pub status: ReportStatus,
    pub timestamp: String, // RFC 3339, UTC
    pub source_count: usize,
}

impl ReportRecord {
    pub fn from_verdict(
        id: impl Into<String>,
        submission: &Submission,
        verdict: &Verdict,
        checked_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: submission.content.trim().to_string(),
            kind: submission.kind,
            truth_score: verdict.truth_score,
            category: verdict.category.clone(),
            status: ReportStatus::from_score(verdict.truth_score),
            timestamp: checked_at.into(),
            source_count: verdict.sources.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_submission_uses_upload_descriptor() {
        let submission = Submission::image("photo.PNG").unwrap();
        assert_eq!(submission.kind, ContentKind::Image);
        assert_eq!(submission.content, "Image analysis of photo.PNG");
    }

    #[test]
    fn image_submission_rejects_other_formats() {
        assert!(matches!(
            Submission::image("scan.pdf"),
            Err(ClassifyError::UnsupportedImage(name)) if name == "scan.pdf"
        ));
        assert!(Submission::image("noextension").is_err());
        assert!(Submission::image(".png").is_err());
    }

    #[test]
    fn truth_band_thresholds() {
        assert_eq!(TruthBand::from_score(100), TruthBand::LikelyTrue);
        assert_eq!(TruthBand::from_score(70), TruthBand::LikelyTrue);
        assert_eq!(TruthBand::from_score(69), TruthBand::Uncertain);
        assert_eq!(TruthBand::from_score(40), TruthBand::Uncertain);
        assert_eq!(TruthBand::from_score(39), TruthBand::LikelyFalse);
        assert_eq!(TruthBand::from_score(0), TruthBand::LikelyFalse);
    }

    #[test]
    fn record_from_verdict_derives_status_and_source_count() {
        let submission = Submission::text("  The council approved the budget  ");
        let verdict = Verdict {
            truth_score: 82,
            explanation: "ok".to_string(),
            sources: vec![SourceCitation::new("Reuters", "https://reuters.com", "High")],
            category: "Verified News".to_string(),
            confidence_label: "High Confidence - True".to_string(),
        };
        let record =
            ReportRecord::from_verdict("check-1", &submission, &verdict, "2024-01-15T10:30:00Z");
        assert_eq!(record.content, "The council approved the budget");
        assert_eq!(record.status, ReportStatus::Verified);
        assert_eq!(record.source_count, 1);
        assert_eq!(record.kind, ContentKind::Text);
    }

    #[test]
    fn content_kind_parses_case_insensitively() {
        assert_eq!("URL".parse::<ContentKind>(), Ok(ContentKind::Url));
        assert!("video".parse::<ContentKind>().is_err());
    }
}
