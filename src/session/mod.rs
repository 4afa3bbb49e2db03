//! Answer collection for the six-section questionnaire wizard.
//!
//! The original flow kept the in-progress answer set in page-global state;
//! here it is an explicit [`DiagnosisSession`] value with a defined start and
//! finish, owning an [`AnswerSheet`] and the current section cursor.

use crate::core::{catalog, Answer, Factor, FactorScores, PersonalityResult};
use crate::scoring::{self, ScoringThresholds};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("question {0} does not exist in the catalog")]
    UnknownQuestion(u32),

    #[error("section {section} is incomplete: {answered}/{required} answered")]
    SectionIncomplete {
        section: usize,
        answered: usize,
        required: usize,
    },

    #[error("already at the first section")]
    AtFirstSection,

    #[error("the questionnaire is already finished")]
    AlreadyFinished,

    #[error("questionnaire incomplete: {answered}/{required} questions answered")]
    Incomplete { answered: usize, required: usize },
}

/// At most one answer per question id; recording again overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: BTreeMap<u32, bool>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert an answer. Returns the previous value when overwriting.
    pub fn record(&mut self, question_id: u32, value: bool) -> Result<Option<bool>, SessionError> {
        if catalog::question(question_id).is_none() {
            return Err(SessionError::UnknownQuestion(question_id));
        }
        Ok(self.answers.insert(question_id, value))
    }

    pub fn get(&self, question_id: u32) -> Option<bool> {
        self.answers.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of answered questions within one factor's section.
    pub fn answered_in(&self, factor: Factor) -> usize {
        catalog::questions_for(factor)
            .filter(|q| self.answers.contains_key(&q.id))
            .count()
    }

    /// True once every catalog question has an answer.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == catalog::CATALOG_LEN
    }

    /// The sheet as a flat answer list, ordered by question id.
    pub fn answers(&self) -> Vec<Answer> {
        self.answers
            .iter()
            .map(|(&question_id, &value)| Answer { question_id, value })
            .collect()
    }

    pub fn scores(&self) -> FactorScores {
        FactorScores::tally(&self.answers())
    }
}

/// Linear wizard over the six catalog sections with guarded transitions.
#[derive(Debug, Clone)]
pub struct DiagnosisSession {
    sheet: AnswerSheet,
    current_section: usize,
    finished: bool,
    thresholds: ScoringThresholds,
}

impl Default for DiagnosisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosisSession {
    pub fn new() -> Self {
        Self::with_thresholds(ScoringThresholds::default())
    }

    pub fn with_thresholds(thresholds: ScoringThresholds) -> Self {
        Self {
            sheet: AnswerSheet::new(),
            current_section: 0,
            finished: false,
            thresholds,
        }
    }

    pub fn current_section(&self) -> usize {
        self.current_section
    }

    pub fn current_factor(&self) -> Factor {
        Factor::ALL[self.current_section]
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    /// Record an answer for any catalog question, not just the current
    /// section; revisiting via `back()` must be able to change answers.
    pub fn record(&mut self, question_id: u32, value: bool) -> Result<(), SessionError> {
        if self.finished {
            return Err(SessionError::AlreadyFinished);
        }
        self.sheet.record(question_id, value)?;
        Ok(())
    }

    fn guard_section_complete(&self) -> Result<(), SessionError> {
        let answered = self.sheet.answered_in(self.current_factor());
        if answered < catalog::QUESTIONS_PER_SECTION {
            return Err(SessionError::SectionIncomplete {
                section: self.current_section,
                answered,
                required: catalog::QUESTIONS_PER_SECTION,
            });
        }
        Ok(())
    }

    /// Advance to the next section; on the last section, finish instead.
    /// Blocked while the current section has unanswered questions.
    pub fn next(&mut self) -> Result<(), SessionError> {
        if self.finished {
            return Err(SessionError::AlreadyFinished);
        }
        self.guard_section_complete()?;
        if self.current_section + 1 < Factor::ALL.len() {
            self.current_section += 1;
        } else {
            self.finished = true;
        }
        Ok(())
    }

    /// Return to the previous section without losing any answers.
    pub fn back(&mut self) -> Result<(), SessionError> {
        if self.finished {
            return Err(SessionError::AlreadyFinished);
        }
        if self.current_section == 0 {
            return Err(SessionError::AtFirstSection);
        }
        self.current_section -= 1;
        Ok(())
    }

    /// Compute the result. Only available once every question is answered.
    pub fn result(&self) -> Result<PersonalityResult, SessionError> {
        if !self.sheet.is_complete() {
            return Err(SessionError::Incomplete {
                answered: self.sheet.len(),
                required: catalog::CATALOG_LEN,
            });
        }
        Ok(scoring::classify(&self.sheet.scores(), &self.thresholds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Archetype, SecondaryAxis};

    fn answer_section(session: &mut DiagnosisSession, section: usize, value: bool) {
        let questions = catalog::section(section).unwrap();
        for q in questions {
            session.record(q.id, value).unwrap();
        }
    }

    #[test]
    fn test_record_rejects_unknown_question() {
        let mut session = DiagnosisSession::new();
        assert_eq!(
            session.record(61, true),
            Err(SessionError::UnknownQuestion(61))
        );
    }

    #[test]
    fn test_next_blocked_until_section_complete() {
        let mut session = DiagnosisSession::new();
        session.record(1, true).unwrap();
        assert_eq!(
            session.next(),
            Err(SessionError::SectionIncomplete {
                section: 0,
                answered: 1,
                required: 10,
            })
        );
        answer_section(&mut session, 0, true);
        assert!(session.next().is_ok());
        assert_eq!(session.current_section(), 1);
    }

    #[test]
    fn test_back_fails_on_first_section() {
        let mut session = DiagnosisSession::new();
        assert_eq!(session.back(), Err(SessionError::AtFirstSection));
    }

    #[test]
    fn test_back_preserves_answers() {
        let mut session = DiagnosisSession::new();
        answer_section(&mut session, 0, true);
        session.next().unwrap();
        session.back().unwrap();
        assert_eq!(session.sheet().answered_in(Factor::A), 10);
        // Re-answering after going back still lets the guard pass.
        session.record(3, false).unwrap();
        assert!(session.next().is_ok());
    }

    #[test]
    fn test_upsert_does_not_grow_sheet() {
        let mut session = DiagnosisSession::new();
        session.record(7, true).unwrap();
        session.record(7, false).unwrap();
        assert_eq!(session.sheet().len(), 1);
        assert_eq!(session.sheet().get(7), Some(false));
    }

    #[test]
    fn test_result_gated_on_completion() {
        let mut session = DiagnosisSession::new();
        answer_section(&mut session, 0, true);
        assert_eq!(
            session.result(),
            Err(SessionError::Incomplete {
                answered: 10,
                required: 60,
            })
        );
    }

    #[test]
    fn test_full_walkthrough_yields_result() {
        let mut session = DiagnosisSession::new();
        // Yes to B, C, D sections, no elsewhere: the Sakura profile.
        for section in 0..Factor::ALL.len() {
            let value = (1..=3).contains(&section);
            answer_section(&mut session, section, value);
            session.next().unwrap();
        }
        assert!(session.is_finished());
        let result = session.result().unwrap();
        assert_eq!(result.primary, Archetype::Sakura);
        assert_eq!(result.secondary, SecondaryAxis::Digital);
    }

    #[test]
    fn test_finished_session_rejects_further_input() {
        let mut session = DiagnosisSession::new();
        for section in 0..Factor::ALL.len() {
            answer_section(&mut session, section, false);
            session.next().unwrap();
        }
        assert_eq!(session.record(1, true), Err(SessionError::AlreadyFinished));
        assert_eq!(session.next(), Err(SessionError::AlreadyFinished));
        assert_eq!(session.back(), Err(SessionError::AlreadyFinished));
        // The computed result is still available.
        assert!(session.result().is_ok());
    }
}
