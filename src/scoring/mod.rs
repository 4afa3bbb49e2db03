//! Personality-type classification.
//!
//! Tallies yes-answers per factor, then classifies the five classifying
//! scores through an ordered rule table: each rule is a conjunction of five
//! band predicates against the midpoint, and the first matching rule wins.
//! When nothing matches, the designated default archetype is returned; a
//! fallthrough is a valid silent outcome, not an error.

use crate::core::{catalog, Answer, Archetype, Factor, FactorScores, PersonalityResult, SecondaryAxis};
use serde::{Deserialize, Serialize};

/// Score band relative to the midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Score strictly below the midpoint.
    Low,
    /// Score at or above the midpoint.
    High,
}

impl Band {
    fn matches(&self, score: u8, midpoint: u8) -> bool {
        match self {
            Band::Low => score < midpoint,
            Band::High => score >= midpoint,
        }
    }
}

/// One classification rule: band pattern over factors A..E, in that order.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeRule {
    pub pattern: [Band; 5],
    pub archetype: Archetype,
}

use Band::{High, Low};

/// Rule table in priority order. First match wins.
pub const ARCHETYPE_RULES: [ArchetypeRule; 6] = [
    ArchetypeRule { pattern: [Low, High, High, High, Low], archetype: Archetype::Sakura },
    ArchetypeRule { pattern: [High, Low, High, High, Low], archetype: Archetype::Ume },
    ArchetypeRule { pattern: [Low, Low, High, Low, High], archetype: Archetype::Momo },
    ArchetypeRule { pattern: [High, Low, High, Low, High], archetype: Archetype::Sumomo },
    ArchetypeRule { pattern: [Low, High, High, Low, High], archetype: Archetype::Anzu },
    ArchetypeRule { pattern: [High, High, High, High, Low], archetype: Archetype::Kaki },
];

/// Archetype returned when no rule matches.
pub const DEFAULT_ARCHETYPE: Archetype = Archetype::Sakura;

/// Thresholds for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringThresholds {
    /// Midpoint for the primary band predicates.
    #[serde(default = "default_midpoint")]
    pub midpoint: u8,

    /// Secondary axis is Digital when the C score is strictly above this.
    #[serde(default = "default_secondary_cutoff")]
    pub secondary_cutoff: u8,
}

fn default_midpoint() -> u8 {
    5
}

fn default_secondary_cutoff() -> u8 {
    5
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            midpoint: default_midpoint(),
            secondary_cutoff: default_secondary_cutoff(),
        }
    }
}

impl ScoringThresholds {
    /// Thresholds of the earlier questionnaire revision.
    ///
    /// Its secondary cutoff of 10 is unreachable on a 0-10 score, so every
    /// result comes out Analog. Kept for comparing against stored results
    /// produced by that revision.
    pub fn legacy() -> Self {
        Self {
            midpoint: 5,
            secondary_cutoff: 10,
        }
    }
}

impl FactorScores {
    /// Count yes-answers per factor over the static catalog.
    ///
    /// Answers for unknown question ids are ignored, and absent answers
    /// count as no. Completeness is the caller's concern; the tally itself
    /// accepts partial input.
    pub fn tally(answers: &[Answer]) -> FactorScores {
        let mut scores = FactorScores::default();
        for answer in answers {
            if !answer.value {
                continue;
            }
            let Some(question) = catalog::question(answer.question_id) else {
                continue;
            };
            match question.factor {
                Factor::A => scores.a += 1,
                Factor::B => scores.b += 1,
                Factor::C => scores.c += 1,
                Factor::D => scores.d += 1,
                Factor::E => scores.e += 1,
                Factor::S => scores.stress += 1,
            }
        }
        scores
    }
}

/// Classify tallied scores into a primary archetype and secondary axis.
///
/// Pure and total: the same scores always produce the same result, and a
/// result is produced for every input. The stress score takes no part in
/// classification.
pub fn classify(scores: &FactorScores, thresholds: &ScoringThresholds) -> PersonalityResult {
    let primary = classify_primary(scores, thresholds);
    let secondary = classify_secondary(scores.c, thresholds);
    PersonalityResult { primary, secondary }
}

/// Classify with the canonical thresholds.
pub fn classify_default(scores: &FactorScores) -> PersonalityResult {
    classify(scores, &ScoringThresholds::default())
}

/// Tally and classify in one step.
pub fn score_answers(answers: &[Answer], thresholds: &ScoringThresholds) -> PersonalityResult {
    classify(&FactorScores::tally(answers), thresholds)
}

fn classify_primary(scores: &FactorScores, thresholds: &ScoringThresholds) -> Archetype {
    let ordered = [scores.a, scores.b, scores.c, scores.d, scores.e];
    ARCHETYPE_RULES
        .iter()
        .find(|rule| {
            rule.pattern
                .iter()
                .zip(ordered)
                .all(|(band, score)| band.matches(score, thresholds.midpoint))
        })
        .map(|rule| rule.archetype)
        .unwrap_or(DEFAULT_ARCHETYPE)
}

fn classify_secondary(c_score: u8, thresholds: &ScoringThresholds) -> SecondaryAxis {
    if c_score > thresholds.secondary_cutoff {
        SecondaryAxis::Digital
    } else {
        SecondaryAxis::Analog
    }
}
