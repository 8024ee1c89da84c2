//! Ranking candidates and ranked output records.

use std::collections::BTreeMap;

use crate::Criterion;

/// One ranking candidate: an opaque identity plus its criteria vector.
///
/// The identity is propagated through the ranker untouched and never
/// interpreted. The criteria map omits [`Criterion::Distance`] when the
/// caller supplied no coordinates; every alternative in one ranking call
/// must carry values for the same active criteria.
///
/// # Examples
/// ```
/// use wisata_core::{Alternative, Criterion};
///
/// let candidate = Alternative::new("pantai-kuta")
///     .with_criterion(Criterion::Attractions, 12.0)
///     .with_criterion(Criterion::TicketPrice, 15_000.0);
/// assert_eq!(candidate.criterion(Criterion::Attractions), Some(12.0));
/// assert_eq!(candidate.criterion(Criterion::Distance), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    /// Opaque stable key from the upstream catalog.
    pub id: String,
    /// Raw criterion values assembled by the orchestration layer.
    pub criteria: BTreeMap<Criterion, f64>,
}

impl Alternative {
    /// Construct an alternative with an empty criteria vector.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            criteria: BTreeMap::new(),
        }
    }

    /// Add a criterion value while returning `self` for chaining.
    #[must_use]
    pub fn with_criterion(mut self, criterion: Criterion, value: f64) -> Self {
        self.criteria.insert(criterion, value);
        self
    }

    /// Return the raw value for a criterion, if present.
    #[must_use]
    pub fn criterion(&self, criterion: Criterion) -> Option<f64> {
        self.criteria.get(&criterion).copied()
    }
}

/// An alternative annotated with its preference score and position.
///
/// Produced only by a ranking call; scores lie in `0.0..=1.0`, rounded to
/// five decimal places, and ranks are 1-based positions in the
/// descending-score order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedAlternative {
    /// The candidate, unchanged from the input.
    pub alternative: Alternative,
    /// TOPSIS preference score in `0.0..=1.0`.
    pub score: f64,
    /// 1-based position after the stable descending sort.
    pub rank: usize,
}
