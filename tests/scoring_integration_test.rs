//! End-to-end scoring behavior over the static catalog.

use egogram::catalog;
use egogram::{
    classify, classify_default, score_answers, Answer, Archetype, Factor, FactorScores,
    SecondaryAxis, ScoringThresholds,
};
use proptest::prelude::*;

fn answers_with_true_factors(factors: &[Factor]) -> Vec<Answer> {
    catalog::questions()
        .iter()
        .map(|q| Answer {
            question_id: q.id,
            value: factors.contains(&q.factor),
        })
        .collect()
}

#[test]
fn all_no_answers_yield_default_archetype() {
    let answers = answers_with_true_factors(&[]);
    let scores = FactorScores::tally(&answers);
    assert_eq!(scores, FactorScores::default());

    let result = score_answers(&answers, &ScoringThresholds::default());
    assert_eq!(result.primary, Archetype::Sakura);
    assert_eq!(result.secondary, SecondaryAxis::Analog);
}

#[test]
fn all_yes_answers_max_every_score_and_fall_through() {
    let answers = answers_with_true_factors(&Factor::ALL);
    let scores = FactorScores::tally(&answers);
    assert_eq!(
        scores,
        FactorScores {
            a: 10,
            b: 10,
            c: 10,
            d: 10,
            e: 10,
            stress: 10,
        }
    );

    let result = classify_default(&scores);
    assert_eq!(result.primary, Archetype::Sakura);
}

#[test]
fn sakura_profile_matches_first_rule() {
    // Yes to every B, C and D question, no elsewhere: A=0, B=10, C=10,
    // D=10, E=0 satisfies (A<5, B>=5, C>=5, D>=5, E<5).
    let answers = answers_with_true_factors(&[Factor::B, Factor::C, Factor::D]);
    let result = score_answers(&answers, &ScoringThresholds::default());
    assert_eq!(result.primary, Archetype::Sakura);
    assert_eq!(result.secondary, SecondaryAxis::Digital);
}

#[test]
fn secondary_boundary_under_both_cutoff_revisions() {
    let c_only = |count: u8| FactorScores {
        c: count,
        ..Default::default()
    };

    let canonical = ScoringThresholds::default();
    assert_eq!(classify(&c_only(5), &canonical).secondary, SecondaryAxis::Analog);
    assert_eq!(classify(&c_only(6), &canonical).secondary, SecondaryAxis::Digital);

    // Divergent revision: cutoff 10 leaves the upper label unreachable.
    let legacy = ScoringThresholds::legacy();
    assert_eq!(classify(&c_only(10), &legacy).secondary, SecondaryAxis::Analog);
}

#[test]
fn stress_answers_never_change_classification() {
    let without_stress = answers_with_true_factors(&[Factor::B, Factor::C, Factor::D]);
    let with_stress = answers_with_true_factors(&[Factor::B, Factor::C, Factor::D, Factor::S]);
    assert_eq!(
        score_answers(&without_stress, &ScoringThresholds::default()),
        score_answers(&with_stress, &ScoringThresholds::default())
    );
}

proptest! {
    #[test]
    fn scoring_is_order_independent(values in prop::collection::vec(any::<bool>(), 60)) {
        let answers: Vec<Answer> = values
            .iter()
            .enumerate()
            .map(|(index, &value)| Answer {
                question_id: index as u32 + 1,
                value,
            })
            .collect();

        let mut reversed = answers.clone();
        reversed.reverse();

        let thresholds = ScoringThresholds::default();
        prop_assert_eq!(
            score_answers(&answers, &thresholds),
            score_answers(&reversed, &thresholds)
        );
    }

    #[test]
    fn classification_is_total(
        a in 0u8..=10,
        b in 0u8..=10,
        c in 0u8..=10,
        d in 0u8..=10,
        e in 0u8..=10,
        stress in 0u8..=10,
    ) {
        let scores = FactorScores { a, b, c, d, e, stress };
        let result = classify_default(&scores);
        prop_assert!(Archetype::ALL.contains(&result.primary));

        // The secondary axis is a function of the C score alone.
        let expected = if c > 5 { SecondaryAxis::Digital } else { SecondaryAxis::Analog };
        prop_assert_eq!(result.secondary, expected);
    }
}
