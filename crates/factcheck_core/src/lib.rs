//! Verification engine contract for the fact-check dashboard.
//!
//! [`Classifier`] is the seam a real analysis backend plugs into.
//! [`KeywordClassifier`] is the placeholder engine the dashboard ships with,
//! driven by a [`ClassifierPolicy`]. [`CheckSession`] holds the state of one
//! check view.

pub mod classifier;
pub mod error;
pub mod policy;
pub mod schema;
pub mod session;

pub use classifier::{Classifier, KeywordClassifier};
pub use error::ClassifyError;
pub use policy::{ClassifierPolicy, Outcome};
pub use schema::{
    ContentKind, ReportRecord, ReportStatus, SourceCitation, Submission, TruthBand, Verdict,
};
pub use session::CheckSession;
