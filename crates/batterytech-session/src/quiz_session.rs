// SPDX-License-Identifier: Apache-2.0

use crate::error::SessionError;
use batterytech_model::QuizQuestion;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Start,
    Question,
    Result,
}

impl SessionPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Question => "question",
            Self::Result => "result",
        }
    }
}

impl Display for SessionPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-progress quiz over a fixed list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRound {
    unit: u32,
    questions: Vec<QuizQuestion>,
    index: usize,
    selected: Option<usize>,
    submitted: bool,
    score: usize,
}

impl QuestionRound {
    fn begin(unit: u32, questions: Vec<QuizQuestion>) -> Self {
        Self {
            unit,
            questions,
            index: 0,
            selected: None,
            submitted: false,
            score: 0,
        }
    }

    #[must_use]
    pub fn unit(&self) -> u32 {
        self.unit
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.index]
    }

    /// Whether the submitted selection was right. `None` before submission.
    #[must_use]
    pub fn answered_correctly(&self) -> Option<bool> {
        if !self.submitted {
            return None;
        }
        self.selected.map(|option| self.current().is_correct(option))
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.total() as f64 * 100.0
    }
}

/// Summary shown once the last question has been passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    unit: u32,
    questions: Vec<QuizQuestion>,
    score: usize,
}

impl QuizOutcome {
    #[must_use]
    pub fn unit(&self) -> u32 {
        self.unit
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        (self.score as f64 / self.total() as f64 * 100.0).round() as u32
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        Feedback::for_percentage(self.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Excellent,
    Good,
    Fair,
    KeepStudying,
}

impl Feedback {
    #[must_use]
    pub const fn for_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Excellent,
            70..=89 => Self::Good,
            50..=69 => Self::Fair,
            _ => Self::KeepStudying,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You have a deep understanding of this topic.",
            Self::Good => "Good job! You have a solid grasp of the material.",
            Self::Fair => {
                "Not bad! You have a basic understanding, but there's room for improvement."
            }
            Self::KeepStudying => "Keep studying! This topic needs more review.",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    Start,
    Question(QuestionRound),
    Result(QuizOutcome),
}

impl QuizState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self {
            Self::Start => SessionPhase::Start,
            Self::Question(_) => SessionPhase::Question,
            Self::Result(_) => SessionPhase::Result,
        }
    }
}

/// Start → Question → Result walk over one unit's questions.
///
/// Transitions called from a state where they mean nothing return
/// [`SessionError::InvalidTransition`] and leave the session as it was.
/// Choosing an option after submission, submitting twice and submitting
/// without a choice are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    state: QuizState,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Running score; zero before a unit is chosen.
    #[must_use]
    pub fn score(&self) -> usize {
        match &self.state {
            QuizState::Start => 0,
            QuizState::Question(round) => round.score,
            QuizState::Result(outcome) => outcome.score,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match &self.state {
            QuizState::Question(round) => Some(round.current()),
            _ => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        match &self.state {
            QuizState::Question(round) => Some(round.progress()),
            _ => None,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> Option<u32> {
        match &self.state {
            QuizState::Result(outcome) => Some(outcome.percentage()),
            _ => None,
        }
    }

    /// Questions are asked in the order given and must all belong to `unit`.
    pub fn select_unit(
        &mut self,
        unit: u32,
        questions: Vec<QuizQuestion>,
    ) -> Result<(), SessionError> {
        self.expect_phase("select_unit", SessionPhase::Start)?;
        if questions.is_empty() {
            return Err(SessionError::EmptyQuestionList { unit });
        }
        if let Some(stray) = questions.iter().find(|q| q.unit != unit) {
            return Err(SessionError::QuestionFromOtherUnit {
                unit,
                question: stray.id.as_str().to_string(),
                question_unit: stray.unit,
            });
        }
        self.state = QuizState::Question(QuestionRound::begin(unit, questions));
        Ok(())
    }

    pub fn select_option(&mut self, option: usize) -> Result<(), SessionError> {
        let round = self.round_mut("select_option")?;
        if round.submitted {
            return Ok(());
        }
        let options = round.current().options.len();
        if option >= options {
            return Err(SessionError::OptionOutOfRange {
                index: option,
                options,
            });
        }
        round.selected = Some(option);
        Ok(())
    }

    pub fn submit_answer(&mut self) -> Result<(), SessionError> {
        let round = self.round_mut("submit_answer")?;
        let Some(option) = round.selected else {
            return Ok(());
        };
        if round.submitted {
            return Ok(());
        }
        round.submitted = true;
        if round.current().is_correct(option) {
            round.score += 1;
        }
        Ok(())
    }

    pub fn next_question(&mut self) -> Result<(), SessionError> {
        let round = self.round_mut("next_question")?;
        if round.index + 1 < round.total() {
            round.index += 1;
            round.selected = None;
            round.submitted = false;
            return Ok(());
        }
        if let QuizState::Question(round) = std::mem::take(&mut self.state) {
            self.state = QuizState::Result(QuizOutcome {
                unit: round.unit,
                questions: round.questions,
                score: round.score,
            });
        }
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), SessionError> {
        if self.phase() == SessionPhase::Start {
            return Err(SessionError::InvalidTransition {
                operation: "restart",
                phase: SessionPhase::Start,
            });
        }
        self.state = QuizState::Start;
        Ok(())
    }

    /// Asks the same questions again from the first one.
    pub fn retake(&mut self) -> Result<(), SessionError> {
        self.expect_phase("retake", SessionPhase::Result)?;
        if let QuizState::Result(outcome) = std::mem::take(&mut self.state) {
            self.state = QuizState::Question(QuestionRound::begin(outcome.unit, outcome.questions));
        }
        Ok(())
    }

    fn expect_phase(
        &self,
        operation: &'static str,
        expected: SessionPhase,
    ) -> Result<(), SessionError> {
        let phase = self.phase();
        if phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition { operation, phase })
        }
    }

    fn round_mut(&mut self, operation: &'static str) -> Result<&mut QuestionRound, SessionError> {
        match &mut self.state {
            QuizState::Question(round) => Ok(round),
            other => Err(SessionError::InvalidTransition {
                operation,
                phase: other.phase(),
            }),
        }
    }
}
