//! Compliance scoring and aggregation.
//!
//! [`score_domain`] classifies a single domain record; [`reduce`] folds it
//! over an organization's base domains and derives the percentage summary.

pub mod aggregate;
pub mod counters;
pub mod domain;
pub mod record;

pub use aggregate::{reduce, ComplianceSummary, ReduceOutcome};
pub use counters::{ComplianceCounters, ComplianceDimension, IneligibleDomain};
pub use domain::score_domain;
pub use record::{ScoreRecord, WeakCryptoEntry};
