//! Ranking criteria, polarities, and per-request weights.
//!
//! The criterion set is closed: a destination is ranked on its distance
//! from the caller, attraction count, facility count, adult ticket price,
//! and summed parking capacity. Each criterion carries a fixed polarity;
//! weights arrive per request as fractions of 1.0 (converted upstream
//! from a 0–100 scale).
//!
//! # Examples
//! ```
//! use wisata_core::{Criterion, CriterionWeights, Polarity};
//!
//! # fn main() -> Result<(), wisata_core::WeightError> {
//! let weights = CriterionWeights::new()
//!     .with_weight(Criterion::Attractions, 0.5)?
//!     .with_weight(Criterion::TicketPrice, 0.5)?;
//! assert_eq!(weights.weight(Criterion::Attractions), Some(0.5));
//! assert_eq!(Criterion::TicketPrice.polarity(), Polarity::Cost);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

/// A ranking criterion for a tourism destination.
///
/// The `Ord` derive fixes the matrix column order used by the ranker:
/// criteria always iterate in declaration order, so columns align
/// positionally across every step of a ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Criterion {
    /// Great-circle distance from the caller's location, in kilometres.
    /// Only present when the caller supplied coordinates.
    Distance,
    /// Number of attractions at the destination.
    Attractions,
    /// Number of facilities at the destination.
    Facilities,
    /// Adult ticket price.
    TicketPrice,
    /// Summed parking capacity across the destination's lots.
    ParkingCapacity,
}

impl Criterion {
    /// All criteria in column order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Distance,
            Self::Attractions,
            Self::Facilities,
            Self::TicketPrice,
            Self::ParkingCapacity,
        ]
    }

    /// Return the criterion's wire name.
    ///
    /// # Examples
    /// ```
    /// use wisata_core::Criterion;
    ///
    /// assert_eq!(Criterion::TicketPrice.as_str(), "ticketPrice");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Attractions => "attractions",
            Self::Facilities => "facilities",
            Self::TicketPrice => "ticketPrice",
            Self::ParkingCapacity => "parkingCapacity",
        }
    }

    /// The criterion's fixed polarity.
    ///
    /// Distance and ticket price are costs (lower is better); the count
    /// criteria are benefits (higher is better).
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Distance | Self::TicketPrice => Polarity::Cost,
            Self::Attractions | Self::Facilities | Self::ParkingCapacity => Polarity::Benefit,
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether higher or lower raw values are preferred for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// Higher raw values are preferred; the ideal-positive is the column max.
    Benefit,
    /// Lower raw values are preferred; the ideal-positive is the column min.
    Cost,
}

/// The engine's standard polarity mapping, one entry per criterion.
#[must_use]
pub fn standard_polarities() -> BTreeMap<Criterion, Polarity> {
    Criterion::all()
        .into_iter()
        .map(|criterion| (criterion, criterion.polarity()))
        .collect()
}

/// Errors returned when building [`CriterionWeights`].
#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    /// A weight was non-finite or outside `0.0..=1.0`.
    #[error("weight {weight} for {criterion} must be a finite value between 0.0 and 1.0")]
    OutOfRange {
        /// The affected criterion.
        criterion: Criterion,
        /// The rejected weight.
        weight: f64,
    },
}

/// Per-request criterion weights, each validated into `0.0..=1.0`.
///
/// Callers guarantee that the weights of active criteria sum to 1.0 (the
/// fraction form of the upstream 0–100 scale). The engine deliberately
/// does not re-check or renormalize that sum; doing so silently would
/// change documented scores.
///
/// # Examples
/// ```
/// use wisata_core::{Criterion, CriterionWeights};
///
/// # fn main() -> Result<(), wisata_core::WeightError> {
/// let weights = CriterionWeights::new()
///     .with_weight(Criterion::Distance, 0.4)?
///     .with_weight(Criterion::Attractions, 0.6)?
///     .with_weight(Criterion::Facilities, 0.0)?;
/// // Zero-weight criteria are not active.
/// let active: Vec<_> = weights.active().collect();
/// assert_eq!(active.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CriterionWeights {
    weights: BTreeMap<Criterion, f64>,
}

impl CriterionWeights {
    /// Construct an empty weight map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Return the weight for a criterion, if present.
    #[must_use]
    pub fn weight(&self, criterion: Criterion) -> Option<f64> {
        self.weights.get(&criterion).copied()
    }

    /// Insert or update a criterion weight.
    ///
    /// # Errors
    /// Returns [`WeightError::OutOfRange`] for non-finite weights or
    /// weights outside `0.0..=1.0`. Out-of-range input is a caller bug;
    /// it is rejected rather than clamped.
    pub fn set_weight(&mut self, criterion: Criterion, weight: f64) -> Result<(), WeightError> {
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(WeightError::OutOfRange { criterion, weight });
        }
        self.weights.insert(criterion, weight);
        Ok(())
    }

    /// Add a criterion weight while returning `self` for chaining.
    ///
    /// # Errors
    /// Returns [`WeightError::OutOfRange`] as [`Self::set_weight`] does.
    pub fn with_weight(mut self, criterion: Criterion, weight: f64) -> Result<Self, WeightError> {
        self.set_weight(criterion, weight)?;
        Ok(self)
    }

    /// Active criteria: entries with weight strictly greater than zero,
    /// in column order.
    ///
    /// Zero-weight criteria are excluded from ranking entirely, even when
    /// every alternative carries a value for them.
    pub fn active(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        self.weights
            .iter()
            .filter(|&(_, &weight)| weight > 0.0)
            .map(|(&criterion, &weight)| (criterion, weight))
    }

    /// Report whether no criterion has a positive weight.
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.active().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Criterion::Distance, Polarity::Cost)]
    #[case(Criterion::Attractions, Polarity::Benefit)]
    #[case(Criterion::Facilities, Polarity::Benefit)]
    #[case(Criterion::TicketPrice, Polarity::Cost)]
    #[case(Criterion::ParkingCapacity, Polarity::Benefit)]
    fn polarity_mapping_is_fixed(#[case] criterion: Criterion, #[case] expected: Polarity) {
        assert_eq!(criterion.polarity(), expected);
    }

    #[rstest]
    fn standard_polarities_cover_every_criterion() {
        let polarities = standard_polarities();
        for criterion in Criterion::all() {
            assert_eq!(polarities.get(&criterion), Some(&criterion.polarity()));
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    fn accepts_boundary_weights(#[case] weight: f64) {
        let mut weights = CriterionWeights::new();
        assert!(weights.set_weight(Criterion::Attractions, weight).is_ok());
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.1)]
    #[case(f64::NAN)]
    fn rejects_out_of_range_weights(#[case] weight: f64) {
        let mut weights = CriterionWeights::new();
        let result = weights.set_weight(Criterion::Attractions, weight);
        assert!(matches!(result, Err(WeightError::OutOfRange { .. })));
    }

    #[rstest]
    fn active_excludes_zero_weights_in_column_order() {
        let weights = CriterionWeights::new()
            .with_weight(Criterion::ParkingCapacity, 0.3)
            .and_then(|w| w.with_weight(Criterion::Distance, 0.7))
            .and_then(|w| w.with_weight(Criterion::Facilities, 0.0))
            .expect("valid weights");

        let active: Vec<_> = weights.active().collect();
        assert_eq!(
            active,
            vec![
                (Criterion::Distance, 0.7),
                (Criterion::ParkingCapacity, 0.3)
            ]
        );
    }

    #[rstest]
    fn all_zero_weights_are_inactive() {
        let weights = CriterionWeights::new()
            .with_weight(Criterion::Distance, 0.0)
            .expect("valid weight");
        assert!(weights.is_inactive());
        assert!(CriterionWeights::new().is_inactive());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn criterion_serializes_to_camel_case() {
        let json = serde_json::to_string(&Criterion::TicketPrice).expect("serialize");
        assert_eq!(json, "\"ticketPrice\"");
        let json = serde_json::to_string(&Criterion::ParkingCapacity).expect("serialize");
        assert_eq!(json, "\"parkingCapacity\"");
    }
}
