use async_trait::async_trait;
use rand::Rng;
use tracing::{debug, info};

use crate::error::ClassifyError;
use crate::policy::{ClassifierPolicy, Outcome};
use crate::schema::{Submission, Verdict};

/// Turns a submission into a verdict.
///
/// Implementations must reject blank content with [`ClassifyError::EmptyInput`]
/// before doing any work. The call may take a while; callers that need a
/// pending state or cancellation wrap it in a [`crate::session::CheckSession`].
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, submission: &Submission) -> Result<Verdict, ClassifyError>;
}

pub fn ensure_content(submission: &Submission) -> Result<(), ClassifyError> {
    if submission.is_blank() {
        return Err(ClassifyError::EmptyInput);
    }
    Ok(())
}

/// Placeholder engine: flags content containing a known sensational keyword
/// and draws a score from the matching range after an artificial delay.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    policy: ClassifierPolicy,
}

impl KeywordClassifier {
    /// Fails if `policy` does not pass [`ClassifierPolicy::validate`].
    pub fn new(policy: ClassifierPolicy) -> anyhow::Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &ClassifierPolicy {
        &self.policy
    }

    fn build_verdict(&self, outcome: &Outcome) -> Verdict {
        let truth_score = rand::rng().random_range(outcome.score_min..=outcome.score_max);
        Verdict {
            truth_score,
            explanation: outcome.explanation.clone(),
            sources: self.policy.sources.clone(),
            category: outcome.category.clone(),
            confidence_label: outcome.confidence_label.clone(),
        }
    }
}

#[async_trait]
impl Classifier for KeywordClassifier {
    async fn classify(&self, submission: &Submission) -> Result<Verdict, ClassifyError> {
        ensure_content(submission)?;
        debug!(kind = %submission.kind, delay_ms = self.policy.delay.as_millis() as u64, "classifying submission");

        if !self.policy.delay.is_zero() {
            tokio::time::sleep(self.policy.delay).await;
        }

        let suspicious = self.policy.is_suspicious(&submission.content);
        let outcome = if suspicious {
            &self.policy.suspicious
        } else {
            &self.policy.trusted
        };
        let verdict = self.build_verdict(outcome);
        info!(
            kind = %submission.kind,
            suspicious,
            truth_score = verdict.truth_score,
            category = %verdict.category,
            "fact-check completed"
        );
        Ok(verdict)
    }
}
