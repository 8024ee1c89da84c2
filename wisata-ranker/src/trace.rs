//! Observability hooks for ranking internals.
//!
//! The ranking routine stays pure; callers wanting visibility into the
//! intermediate matrices inject a [`RankingTrace`] instead of the engine
//! printing anything inline. [`LogTrace`] forwards each stage to the
//! `log` facade at debug level; [`NoopTrace`] discards everything and is
//! what [`rank`](crate::rank) uses.
#![forbid(unsafe_code)]

use log::debug;
use wisata_core::Criterion;

/// Receive intermediate artefacts of a ranking call.
///
/// All methods default to no-ops, so implementors override only the
/// stages they care about. Rows are indexed like the input alternatives;
/// columns follow the active-criteria order reported alongside them.
pub trait RankingTrace {
    /// The raw decision matrix, one row per alternative.
    fn decision_matrix(&self, _criteria: &[Criterion], _rows: &[Vec<f64>]) {}

    /// The matrix after vector normalization and weighting.
    fn weighted_matrix(&self, _criteria: &[Criterion], _rows: &[Vec<f64>]) {}

    /// The per-column ideal-positive and ideal-negative vectors.
    fn ideal_solutions(&self, _criteria: &[Criterion], _positive: &[f64], _negative: &[f64]) {}

    /// Separation measures and the resulting score for one alternative.
    fn separation(&self, _id: &str, _d_positive: f64, _d_negative: f64, _score: f64) {}
}

/// A trace that discards every stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl RankingTrace for NoopTrace {}

/// A trace that emits each stage through the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl RankingTrace for LogTrace {
    fn decision_matrix(&self, criteria: &[Criterion], rows: &[Vec<f64>]) {
        debug!("decision matrix columns={criteria:?} rows={rows:?}");
    }

    fn weighted_matrix(&self, criteria: &[Criterion], rows: &[Vec<f64>]) {
        debug!("weighted normalized matrix columns={criteria:?} rows={rows:?}");
    }

    fn ideal_solutions(&self, criteria: &[Criterion], positive: &[f64], negative: &[f64]) {
        debug!("ideal solutions columns={criteria:?} positive={positive:?} negative={negative:?}");
    }

    fn separation(&self, id: &str, d_positive: f64, d_negative: f64, score: f64) {
        debug!("alternative {id}: d+={d_positive} d-={d_negative} score={score}");
    }
}
