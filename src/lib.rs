//! Facade crate for the Wisata destination ranking engine.
//!
//! This crate re-exports the core domain types and the TOPSIS ranker so
//! callers can depend on a single crate. The engine is a pure library:
//! the orchestration layer assembles criteria vectors from persisted
//! destination records, invokes [`distance_km`] when caller coordinates
//! are available, and passes the candidates through [`rank`].

#![forbid(unsafe_code)]

pub use wisata_core::{
    Alternative, Criterion, CriterionWeights, EARTH_RADIUS_KM, GeoPoint, GeoPointError, Polarity,
    RankedAlternative, WeightError, distance_km, standard_polarities,
};
pub use wisata_ranker::{LogTrace, NoopTrace, RankError, RankingTrace, rank, rank_traced};
