//! TOPSIS ranking for tourism destinations.
//!
//! The ranker orders a bounded in-memory set of candidates by similarity
//! to an ideal solution. Each candidate carries raw values for the active
//! criteria; the caller supplies per-request weights and a polarity map
//! distinguishing benefit criteria (higher is better) from cost criteria
//! (lower is better). The computation is synchronous, allocation-local,
//! and free of I/O, so concurrent callers need no locking.
//!
//! Degenerate inputs are expected states, not errors: an empty candidate
//! list, all-zero weights, an all-zero criterion column, or a candidate
//! equidistant from both ideal points all produce a defined score of
//! zero. Malformed inputs — an active criterion missing from some
//! candidate, or lacking a polarity — are caller bugs and surface as
//! [`RankError`] instead of being silently repaired.
//!
//! # Examples
//!
//! ```
//! use wisata_core::{Alternative, Criterion, CriterionWeights, standard_polarities};
//! use wisata_ranker::rank;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let candidates = vec![
//!     Alternative::new("ancol")
//!         .with_criterion(Criterion::Attractions, 10.0)
//!         .with_criterion(Criterion::TicketPrice, 25_000.0),
//!     Alternative::new("ragunan")
//!         .with_criterion(Criterion::Attractions, 4.0)
//!         .with_criterion(Criterion::TicketPrice, 4_000.0),
//! ];
//! let weights = CriterionWeights::new()
//!     .with_weight(Criterion::Attractions, 0.6)?
//!     .with_weight(Criterion::TicketPrice, 0.4)?;
//!
//! let ranked = rank(&candidates, &weights, &standard_polarities())?;
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked[0].score >= ranked[1].score);
//! assert_eq!(ranked[0].rank, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
mod topsis;
mod trace;

pub use error::RankError;
pub use topsis::{rank, rank_traced};
pub use trace::{LogTrace, NoopTrace, RankingTrace};
