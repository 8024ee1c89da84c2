//! Core domain types for the Wisata ranking engine.
//!
//! The engine ranks tourism destinations against per-request weighted
//! criteria. This crate holds the value types shared by the ranker and
//! its callers: geographic points with a great-circle distance function,
//! the closed set of ranking criteria with their fixed polarities, the
//! per-request weight map, and the alternative records flowing through a
//! ranking call.
//!
//! Constructors validate their input and return `Result` to surface
//! invalid values early; none of the types hold state between calls.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod alternative;
pub mod criteria;
pub mod distance;

pub use alternative::{Alternative, RankedAlternative};
pub use criteria::{Criterion, CriterionWeights, Polarity, WeightError, standard_polarities};
pub use distance::{EARTH_RADIUS_KM, GeoPoint, GeoPointError, distance_km};
