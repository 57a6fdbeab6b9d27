use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::classifier::{Classifier, ensure_content};
use crate::error::ClassifyError;
use crate::schema::{Submission, Verdict};

/// State of one check view: at most one classification in flight, which can
/// be cancelled when the view goes away.
pub struct CheckSession<C: Classifier> {
    classifier: Arc<C>,
    in_flight: AtomicBool,
    cancel: Mutex<Option<CancellationToken>>,
    last_verdict: Mutex<Option<Verdict>>,
}

impl<C: Classifier> CheckSession<C> {
    pub fn new(classifier: C) -> Self {
        Self::with_shared(Arc::new(classifier))
    }

    pub fn with_shared(classifier: Arc<C>) -> Self {
        Self {
            classifier,
            in_flight: AtomicBool::new(false),
            cancel: Mutex::new(None),
            last_verdict: Mutex::new(None),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn last_verdict(&self) -> Option<Verdict> {
        lock(&self.last_verdict).clone()
    }

    /// Cancels the pending classification, if any.
    pub fn cancel(&self) {
        if let Some(token) = lock(&self.cancel).as_ref() {
            info!("cancelling pending fact-check");
            token.cancel();
        }
    }

    pub async fn submit(&self, submission: &Submission) -> Result<Verdict, ClassifyError> {
        ensure_content(submission)?;

        // The slot and its token are published under the cancel lock, so a
        // `cancel()` that observes a pending check always finds the token.
        let token = {
            let mut cancel = lock(&self.cancel);
            if self
                .in_flight
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                warn!(kind = %submission.kind, "rejecting submission while another fact-check is pending");
                return Err(ClassifyError::Busy);
            }
            let token = CancellationToken::new();
            *cancel = Some(token.clone());
            token
        };
        let _slot = InFlight { session: self };
        *lock(&self.last_verdict) = None;

        let verdict = tokio::select! {
            result = self.classifier.classify(submission) => result?,
            _ = token.cancelled() => {
                info!(kind = %submission.kind, "fact-check cancelled before completion");
                return Err(ClassifyError::Cancelled);
            }
        };

        *lock(&self.last_verdict) = Some(verdict.clone());
        Ok(verdict)
    }
}

/// Releases the in-flight slot however `submit` exits, including when its
/// future is dropped.
struct InFlight<'a, C: Classifier> {
    session: &'a CheckSession<C>,
}

impl<C: Classifier> Drop for InFlight<'_, C> {
    fn drop(&mut self) {
        lock(&self.session.cancel).take();
        self.session.in_flight.store(false, Ordering::Release);
    }
}

// Poisoning only happens if a holder panicked; the guarded values stay usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::KeywordClassifier;
    use crate::policy::ClassifierPolicy;
    use std::time::Duration;

    fn session() -> Arc<CheckSession<KeywordClassifier>> {
        Arc::new(CheckSession::new(KeywordClassifier::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn pending_only_while_waiting() {
        let session = session();
        assert!(!session.is_pending());

        let task = {
            let session = session.clone();
            tokio::spawn(async move { session.submit(&Submission::text("Markets closed higher")).await })
        };
        tokio::task::yield_now().await;
        assert!(session.is_pending());
        assert!(session.last_verdict().is_none());

        let verdict = task.await.unwrap().unwrap();
        assert!(!session.is_pending());
        assert_eq!(session.last_verdict(), Some(verdict));
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_submission_is_rejected() {
        let session = session();
        let first = {
            let session = session.clone();
            tokio::spawn(async move { session.submit(&Submission::text("first")).await })
        };
        tokio::task::yield_now().await;

        let second = session.submit(&Submission::text("second")).await;
        assert_eq!(second, Err(ClassifyError::Busy));

        assert!(first.await.unwrap().is_ok());
        assert!(session.submit(&Submission::text("third")).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_pending_check() {
        let session = session();
        let task = {
            let session = session.clone();
            tokio::spawn(async move { session.submit(&Submission::text("slow one")).await })
        };
        tokio::task::yield_now().await;
        assert!(session.is_pending());

        session.cancel();
        assert_eq!(task.await.unwrap(), Err(ClassifyError::Cancelled));
        assert!(!session.is_pending());
        assert!(session.last_verdict().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_right_after_claim_is_not_lost() {
        let session = session();
        let submission = Submission::text("raced");
        let pending = session.submit(&submission);
        tokio::pin!(pending);

        // Poll once so the slot is claimed, then cancel before the task runs again.
        tokio::select! {
            biased;
            _ = &mut pending => panic!("check finished before the delay"),
            _ = std::future::ready(()) => {}
        }
        assert!(session.is_pending());
        session.cancel();

        assert_eq!(pending.await, Err(ClassifyError::Cancelled));
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn cancel_when_idle_is_noop() {
        let session = CheckSession::new(KeywordClassifier::new(
            ClassifierPolicy::default().with_delay(Duration::ZERO),
        )
        .unwrap());
        session.cancel();
        assert!(session.submit(&Submission::text("Quiet day")).await.is_ok());
    }

    #[tokio::test]
    async fn empty_input_has_no_side_effects() {
        let session = CheckSession::new(KeywordClassifier::new(
            ClassifierPolicy::default().with_delay(Duration::ZERO),
        )
        .unwrap());
        let earlier = session.submit(&Submission::text("Bridge reopened")).await.unwrap();

        let result = session.submit(&Submission::text("   ")).await;
        assert_eq!(result, Err(ClassifyError::EmptyInput));
        assert!(!session.is_pending());
        assert_eq!(session.last_verdict(), Some(earlier));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_submit_releases_slot() {
        let session = session();
        let submission = Submission::text("abandoned");
        let pending = session.submit(&submission);
        let timed_out = tokio::time::timeout(Duration::from_millis(10), pending).await;
        assert!(timed_out.is_err());
        assert!(!session.is_pending());
    }
}
