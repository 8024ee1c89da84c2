//! Black-box regression scenarios for the TOPSIS ranker.
//!
//! The pinned scores here were computed by hand from the algorithm
//! definition (vector normalization, weighting, mixed-polarity ideals,
//! Euclidean separations) and guard against drift in any intermediate
//! step.

use rstest::rstest;
use wisata_core::{Alternative, Criterion, CriterionWeights, standard_polarities};
use wisata_ranker::rank;

fn weights_of(entries: &[(Criterion, f64)]) -> CriterionWeights {
    let mut weights = CriterionWeights::new();
    for &(criterion, weight) in entries {
        weights.set_weight(criterion, weight).expect("valid weight");
    }
    weights
}

/// Three destinations over three mixed-polarity criteria, including a
/// caller-supplied distance column.
fn jakarta_day_trip() -> Vec<Alternative> {
    vec![
        Alternative::new("ancol")
            .with_criterion(Criterion::Attractions, 12.0)
            .with_criterion(Criterion::TicketPrice, 15_000.0)
            .with_criterion(Criterion::Distance, 2.0),
        Alternative::new("taman-mini")
            .with_criterion(Criterion::Attractions, 8.0)
            .with_criterion(Criterion::TicketPrice, 5_000.0)
            .with_criterion(Criterion::Distance, 10.0),
        Alternative::new("ragunan")
            .with_criterion(Criterion::Attractions, 3.0)
            .with_criterion(Criterion::TicketPrice, 2_500.0)
            .with_criterion(Criterion::Distance, 4.0),
    ]
}

#[rstest]
fn three_way_mixed_polarity_regression() {
    let alternatives = jakarta_day_trip();
    let weights = weights_of(&[
        (Criterion::Attractions, 0.5),
        (Criterion::TicketPrice, 0.3),
        (Criterion::Distance, 0.2),
    ]);

    let ranked = rank(&alternatives, &weights, &standard_polarities()).expect("rank");

    let ids: Vec<_> = ranked
        .iter()
        .map(|entry| entry.alternative.id.as_str())
        .collect();
    assert_eq!(ids, vec!["ancol", "taman-mini", "ragunan"]);

    let expected = [0.59107, 0.55242, 0.45669];
    for (entry, pinned) in ranked.iter().zip(expected) {
        assert!(
            (entry.score - pinned).abs() < 1e-4,
            "{}: expected {pinned}, got {}",
            entry.alternative.id,
            entry.score
        );
    }

    let ranks: Vec<_> = ranked.iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[rstest]
fn output_is_sorted_descending() {
    let alternatives = jakarta_day_trip();
    let weights = weights_of(&[
        (Criterion::Attractions, 0.4),
        (Criterion::TicketPrice, 0.4),
        (Criterion::Distance, 0.2),
    ]);

    let ranked = rank(&alternatives, &weights, &standard_polarities()).expect("rank");

    for pair in ranked.windows(2) {
        if let [better, worse] = pair {
            assert!(better.score >= worse.score);
        }
    }
}

#[rstest]
fn identical_alternatives_tie_in_input_order() {
    let clone = Alternative::new("first")
        .with_criterion(Criterion::Attractions, 5.0)
        .with_criterion(Criterion::TicketPrice, 10_000.0);
    let alternatives = vec![
        clone.clone(),
        Alternative {
            id: "second".to_owned(),
            ..clone.clone()
        },
        Alternative {
            id: "third".to_owned(),
            ..clone
        },
    ];
    let weights = weights_of(&[
        (Criterion::Attractions, 0.5),
        (Criterion::TicketPrice, 0.5),
    ]);

    let ranked = rank(&alternatives, &weights, &standard_polarities()).expect("rank");

    let ids: Vec<_> = ranked
        .iter()
        .map(|entry| entry.alternative.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
    // Identical rows sit on both ideal points at once.
    assert!(ranked.iter().all(|entry| entry.score == 0.0));
}

#[rstest]
fn input_is_not_mutated() {
    let alternatives = jakarta_day_trip();
    let snapshot = alternatives.clone();
    let weights = weights_of(&[
        (Criterion::Attractions, 0.6),
        (Criterion::Distance, 0.4),
    ]);

    let _ranked = rank(&alternatives, &weights, &standard_polarities()).expect("rank");

    assert_eq!(alternatives, snapshot);
}
