//! The TOPSIS ranking pipeline.
//!
//! Technique for Order Preference by Similarity to Ideal Solution: build
//! the decision matrix over the active criteria, vector-normalize each
//! column, apply the weights, derive the ideal-positive and
//! ideal-negative vectors under each criterion's polarity, measure each
//! alternative's Euclidean separation from both, and score it by its
//! relative closeness to the negative ideal.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use wisata_core::{Alternative, Criterion, CriterionWeights, Polarity, RankedAlternative};

use crate::error::RankError;
use crate::trace::{NoopTrace, RankingTrace};

/// Scores are reported to five decimal places.
const SCORE_SCALE: f64 = 100_000.0;

/// Rank alternatives by TOPSIS preference score, best first.
///
/// Active criteria are the entries of `weights` with weight greater than
/// zero, taken in column order; zero-weight criteria never influence the
/// result. With no active criteria, or an empty candidate list, every
/// alternative scores zero and keeps its input position. Ties keep input
/// order (the sort is stable), and ranks are 1-based positions in the
/// returned order.
///
/// # Errors
/// Returns [`RankError`] when an active criterion is missing from some
/// alternative's criteria map or has no entry in `polarities`.
pub fn rank(
    alternatives: &[Alternative],
    weights: &CriterionWeights,
    polarities: &BTreeMap<Criterion, Polarity>,
) -> Result<Vec<RankedAlternative>, RankError> {
    rank_traced(alternatives, weights, polarities, &NoopTrace)
}

/// Rank alternatives while reporting each stage to `trace`.
///
/// Identical to [`rank`] apart from the injected [`RankingTrace`], which
/// receives the decision matrix, the weighted normalized matrix, the
/// ideal vectors, and per-alternative separations as they are computed.
///
/// # Errors
/// Returns [`RankError`] as [`rank`] does.
pub fn rank_traced(
    alternatives: &[Alternative],
    weights: &CriterionWeights,
    polarities: &BTreeMap<Criterion, Polarity>,
    trace: &dyn RankingTrace,
) -> Result<Vec<RankedAlternative>, RankError> {
    let active: Vec<(Criterion, f64)> = weights.active().collect();
    if alternatives.is_empty() || active.is_empty() {
        return Ok(zero_scored(alternatives));
    }

    let criteria: Vec<Criterion> = active.iter().map(|&(criterion, _)| criterion).collect();
    let column_polarities = column_polarities(&criteria, polarities)?;

    let matrix = decision_matrix(alternatives, &criteria)?;
    trace.decision_matrix(&criteria, &matrix);

    let weighted = weighted_normalized(&matrix, &active);
    trace.weighted_matrix(&criteria, &weighted);

    let (ideal_positive, ideal_negative) = ideal_solutions(&weighted, &column_polarities);
    trace.ideal_solutions(&criteria, &ideal_positive, &ideal_negative);

    let mut ranked: Vec<RankedAlternative> = alternatives
        .iter()
        .zip(&weighted)
        .map(|(alternative, row)| {
            let d_positive = euclidean_separation(row, &ideal_positive);
            let d_negative = euclidean_separation(row, &ideal_negative);
            let score = preference_score(d_positive, d_negative);
            trace.separation(&alternative.id, d_positive, d_negative, score);
            RankedAlternative {
                alternative: alternative.clone(),
                score,
                rank: 0,
            }
        })
        .collect();

    // Stable sort: equal scores keep their input order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (position, entry) in ranked.iter_mut().enumerate() {
        entry.rank = position + 1;
    }
    Ok(ranked)
}

/// Degenerate case: no ranking signal, so scores are zero and the input
/// order stands.
fn zero_scored(alternatives: &[Alternative]) -> Vec<RankedAlternative> {
    alternatives
        .iter()
        .enumerate()
        .map(|(position, alternative)| RankedAlternative {
            alternative: alternative.clone(),
            score: 0.0,
            rank: position + 1,
        })
        .collect()
}

fn column_polarities(
    criteria: &[Criterion],
    polarities: &BTreeMap<Criterion, Polarity>,
) -> Result<Vec<Polarity>, RankError> {
    criteria
        .iter()
        .map(|&criterion| {
            polarities
                .get(&criterion)
                .copied()
                .ok_or(RankError::MissingPolarity { criterion })
        })
        .collect()
}

fn decision_matrix(
    alternatives: &[Alternative],
    criteria: &[Criterion],
) -> Result<Vec<Vec<f64>>, RankError> {
    alternatives
        .iter()
        .map(|alternative| {
            criteria
                .iter()
                .map(|&criterion| {
                    alternative
                        .criterion(criterion)
                        .ok_or_else(|| RankError::MissingCriterion {
                            criterion,
                            alternative: alternative.id.clone(),
                        })
                })
                .collect()
        })
        .collect()
}

/// Vector-normalize each column and apply its weight in one pass.
///
/// The divider is the Euclidean norm of the raw column; an all-zero
/// column keeps zeroes rather than dividing by zero.
fn weighted_normalized(matrix: &[Vec<f64>], active: &[(Criterion, f64)]) -> Vec<Vec<f64>> {
    let mut squared_sums = vec![0.0; active.len()];
    for row in matrix {
        for (sum, value) in squared_sums.iter_mut().zip(row) {
            *sum += value * value;
        }
    }
    let dividers: Vec<f64> = squared_sums.iter().map(|sum| sum.sqrt()).collect();

    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(&dividers)
                .zip(active)
                .map(|((&value, &divider), &(_, weight))| {
                    if divider == 0.0 {
                        0.0
                    } else {
                        value / divider * weight
                    }
                })
                .collect()
        })
        .collect()
}

/// Per-column best and worst weighted values under each polarity.
///
/// Benefit columns take (max, min); cost columns take (min, max).
fn ideal_solutions(weighted: &[Vec<f64>], polarities: &[Polarity]) -> (Vec<f64>, Vec<f64>) {
    let mut minima = vec![f64::INFINITY; polarities.len()];
    let mut maxima = vec![f64::NEG_INFINITY; polarities.len()];
    for row in weighted {
        for ((minimum, maximum), &value) in minima.iter_mut().zip(maxima.iter_mut()).zip(row) {
            *minimum = minimum.min(value);
            *maximum = maximum.max(value);
        }
    }

    polarities
        .iter()
        .zip(minima.iter().zip(&maxima))
        .map(|(&polarity, (&minimum, &maximum))| match polarity {
            Polarity::Benefit => (maximum, minimum),
            Polarity::Cost => (minimum, maximum),
        })
        .unzip()
}

fn euclidean_separation(row: &[f64], ideal: &[f64]) -> f64 {
    row.iter()
        .zip(ideal)
        .map(|(&value, &target)| (value - target).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Relative closeness to the negative ideal, rounded to five decimals.
///
/// An alternative sitting exactly on both ideal points (a singleton set,
/// or identical rows) scores zero.
fn preference_score(d_positive: f64, d_negative: f64) -> f64 {
    let total = d_positive + d_negative;
    if total == 0.0 {
        return 0.0;
    }
    (d_negative / total * SCORE_SCALE).round() / SCORE_SCALE
}
