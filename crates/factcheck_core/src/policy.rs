use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::schema::SourceCitation;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

pub const DEFAULT_KEYWORDS: &[&str] = &["miracle", "guaranteed", "secret", "doctors hate"];

const SUSPICIOUS_EXPLANATION: &str = "This content contains multiple red flags commonly associated with misinformation, including sensational claims without credible sources and language designed to bypass critical thinking.";

const TRUSTED_EXPLANATION: &str = "This content appears to be factually accurate based on cross-reference with trusted sources and lack of misleading indicators.";

/// Everything the keyword classifier decides with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierPolicy {
    pub delay: Duration,
    pub keywords: Vec<String>,
    pub suspicious: Outcome,
    pub trusted: Outcome,
    pub sources: Vec<SourceCitation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Outcome {
    pub score_min: u8,
    pub score_max: u8,
    pub category: String,
    pub confidence_label: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PolicyFile {
    general: PolicyGeneral,
    suspicious: Outcome,
    trusted: Outcome,
}

#[derive(Debug, Clone, Deserialize)]
struct PolicyGeneral {
    delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct KeywordsFile {
    keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct SourcesFile {
    sources: Vec<SourceCitation>,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            suspicious: Outcome {
                score_min: 10,
                score_max: 39,
                category: "Health Misinformation".to_string(),
                confidence_label: "High Confidence - False".to_string(),
                explanation: SUSPICIOUS_EXPLANATION.to_string(),
            },
            trusted: Outcome {
                score_min: 75,
                score_max: 94,
                category: "Verified News".to_string(),
                confidence_label: "High Confidence - True".to_string(),
                explanation: TRUSTED_EXPLANATION.to_string(),
            },
            sources: vec![
                SourceCitation::new("Reuters Fact Check", "https://reuters.com", "High"),
                SourceCitation::new("Snopes Verification", "https://snopes.com", "High"),
                SourceCitation::new("Associated Press News", "https://apnews.com", "High"),
            ],
        }
    }
}

impl ClassifierPolicy {
    /// Reads `policy.toml`, `keywords.yaml` and `sources.yaml` from `path`.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let policy_path = path.join("policy.toml");
        let policy_str = fs::read_to_string(&policy_path)
            .with_context(|| format!("reading {}", policy_path.display()))?;
        let policy: PolicyFile = toml::from_str(&policy_str)
            .with_context(|| format!("parsing {}", policy_path.display()))?;

        let keywords_path = path.join("keywords.yaml");
        let keywords_str = fs::read_to_string(&keywords_path)
            .with_context(|| format!("reading {}", keywords_path.display()))?;
        let keywords: KeywordsFile = serde_yaml::from_str(&keywords_str)
            .with_context(|| format!("parsing {}", keywords_path.display()))?;

        let sources_path = path.join("sources.yaml");
        let sources_str = fs::read_to_string(&sources_path)
            .with_context(|| format!("reading {}", sources_path.display()))?;
        let sources: SourcesFile = serde_yaml::from_str(&sources_str)
            .with_context(|| format!("parsing {}", sources_path.display()))?;

        let loaded = Self {
            delay: Duration::from_millis(policy.general.delay_ms),
            keywords: normalize_keywords(keywords.keywords),
            suspicious: policy.suspicious,
            trusted: policy.trusted,
            sources: sources.sources,
        };
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_outcome("suspicious", &self.suspicious)?;
        validate_outcome("trusted", &self.trusted)?;
        if self.keywords.is_empty() {
            bail!("keyword list is empty");
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            bail!("keyword list contains a blank entry");
        }
        if self.sources.is_empty() {
            bail!("at least one source citation is required");
        }
        for source in &self.sources {
            if source.title.trim().is_empty() || source.reliability.trim().is_empty() {
                bail!("source citation needs a title and a reliability label: {source:?}");
            }
        }
        Ok(())
    }

    /// Case-insensitive containment against the keyword set.
    pub fn is_suspicious(&self, content: &str) -> bool {
        let lowered = content.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
    }
}

fn validate_outcome(name: &str, outcome: &Outcome) -> Result<()> {
    if outcome.score_min > outcome.score_max {
        bail!(
            "{name}: score_min {} exceeds score_max {}",
            outcome.score_min,
            outcome.score_max
        );
    }
    if outcome.score_max > 100 {
        bail!("{name}: score_max {} is above 100", outcome.score_max);
    }
    Ok(())
}

fn normalize_keywords(raw: Vec<String>) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::with_capacity(raw.len());
    for keyword in raw {
        let keyword = keyword.trim().to_lowercase();
        if !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        let policy = ClassifierPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.sources.len(), 3);
        assert_eq!(policy.delay, Duration::from_secs(2));
    }

    #[test]
    fn keyword_match_ignores_case() {
        let policy = ClassifierPolicy::default();
        assert!(policy.is_suspicious("DOCTORS HATE this trick"));
        assert!(policy.is_suspicious("a Secret plan"));
        assert!(!policy.is_suspicious("The weather is mild today"));
    }

    #[test]
    fn keywords_set_in_code_match_regardless_of_case() {
        let mut policy = ClassifierPolicy::default();
        policy.keywords = vec!["Shocking".to_string()];
        assert!(policy.validate().is_ok());
        assert!(policy.is_suspicious("shocking news"));
        assert!(policy.is_suspicious("SHOCKING NEWS"));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut policy = ClassifierPolicy::default();
        policy.trusted.score_min = 95;
        policy.trusted.score_max = 80;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn score_above_hundred_is_rejected() {
        let mut policy = ClassifierPolicy::default();
        policy.suspicious.score_max = 101;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn blank_source_title_is_rejected() {
        let mut policy = ClassifierPolicy::default();
        policy.sources.push(SourceCitation::new(" ", "https://example.com", "Low"));
        assert!(policy.validate().is_err());
    }
}
