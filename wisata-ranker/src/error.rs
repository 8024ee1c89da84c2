//! Error types raised when ranking preconditions are violated.
#![forbid(unsafe_code)]

use thiserror::Error;
use wisata_core::Criterion;

/// Errors raised by a ranking call.
///
/// Every variant is a caller-side precondition violation; well-formed
/// input never fails. Degenerate inputs (empty candidate lists, all-zero
/// weights) are handled with defined scores instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    /// An active criterion had no value in some alternative's criteria map.
    ///
    /// A criterion is either present for every alternative in a call or
    /// omitted from weights and polarities entirely; there is no notion
    /// of a partially present criterion.
    #[error("criterion {criterion} has no value for alternative {alternative}")]
    MissingCriterion {
        /// The criterion lacking a value.
        criterion: Criterion,
        /// Identity of the affected alternative.
        alternative: String,
    },
    /// No polarity was supplied for an active criterion.
    #[error("no polarity supplied for active criterion {criterion}")]
    MissingPolarity {
        /// The criterion lacking a polarity.
        criterion: Criterion,
    },
}
