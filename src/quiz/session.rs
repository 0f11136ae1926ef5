use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::models::Catalog,
    quiz::{
        error::QuizError,
        models::{
            AdvanceResult, AnswerResult, DecoyStrategy, FinalScore, Round, RoundPlan, RoundSummary,
            RoundView,
        },
        selector,
    },
};

/// Per-player quiz state machine.
///
/// The current round is built lazily on first access and cached, so
/// re-rendering the same round always shows the same options in the same
/// order. Each round can be answered exactly once.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizSession {
    state: QuizState,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum QuizState {
    NotStarted,
    InProgress {
        plan: RoundPlan,
        current_index: usize,
        score: usize,
        answered_current: bool,
        current_round: Option<Round>,
    },
    Finished {
        score: usize,
        total_rounds: usize,
    },
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            state: QuizState::NotStarted,
        }
    }

    /// Starts a quiz with a fresh round plan. Valid from the idle state or
    /// for a rematch after finishing, not in the middle of a running quiz.
    pub fn start(
        &mut self,
        catalog: &Catalog,
        rounds: usize,
        rng: &mut impl Rng,
    ) -> Result<RoundSummary, QuizError> {
        match self.state {
            QuizState::NotStarted | QuizState::Finished { .. } => {}
            QuizState::InProgress { .. } => return Err(QuizError::InvalidState("start")),
        }

        let plan = selector::select_rounds(catalog, rounds, rng)?;
        self.state = QuizState::InProgress {
            plan,
            current_index: 0,
            score: 0,
            answered_current: false,
            current_round: None,
        };

        Ok(RoundSummary {
            total_rounds: rounds,
        })
    }

    /// Returns the current question with its shuffled options.
    pub fn current_round(
        &mut self,
        catalog: &Catalog,
        decoys: usize,
        strategy: DecoyStrategy,
        rng: &mut impl Rng,
    ) -> Result<RoundView, QuizError> {
        let QuizState::InProgress {
            plan,
            current_index,
            current_round,
            ..
        } = &mut self.state
        else {
            return Err(QuizError::InvalidState("current_round"));
        };

        let round = match current_round {
            Some(round) => round,
            None => {
                let correct = &plan.games[*current_index];
                current_round.insert(selector::build_round(catalog, correct, decoys, strategy, rng)?)
            }
        };

        Ok(RoundView {
            index: *current_index,
            total_rounds: plan.games.len(),
            description: round.correct.description.clone(),
            options: round.options.iter().map(|g| g.title.clone()).collect(),
        })
    }

    /// Scores the given title against the current round. A title that is not
    /// among the round's options is rejected without touching the score or
    /// the answered flag, so the caller may retry with a valid option.
    pub fn submit_answer(
        &mut self,
        selected_title: &str,
        catalog: &Catalog,
        decoys: usize,
        strategy: DecoyStrategy,
        rng: &mut impl Rng,
    ) -> Result<AnswerResult, QuizError> {
        let QuizState::InProgress {
            plan,
            current_index,
            score,
            answered_current,
            current_round,
        } = &mut self.state
        else {
            return Err(QuizError::InvalidState("submit_answer"));
        };

        if *answered_current {
            return Err(QuizError::AlreadyAnswered);
        }

        // A client may submit without having fetched the round first, so the
        // round is built through the same caching path here.
        let round = match current_round {
            Some(round) => round,
            None => {
                let correct = &plan.games[*current_index];
                current_round.insert(selector::build_round(catalog, correct, decoys, strategy, rng)?)
            }
        };

        if !round.options.iter().any(|g| g.title == selected_title) {
            return Err(QuizError::UnknownSelection(selected_title.to_string()));
        }

        let correct = round.correct.title == selected_title;
        if correct {
            *score += 1;
        }
        *answered_current = true;

        Ok(AnswerResult {
            correct,
            correct_title: round.correct.title.clone(),
            score_so_far: *score,
        })
    }

    /// Moves to the next round, or finishes the quiz after the last one.
    /// Only valid once the current round has been answered.
    pub fn advance(&mut self) -> Result<AdvanceResult, QuizError> {
        let QuizState::InProgress {
            plan,
            current_index,
            score,
            answered_current,
            current_round,
        } = &mut self.state
        else {
            return Err(QuizError::InvalidState("advance"));
        };

        if !*answered_current {
            return Err(QuizError::InvalidState("advance"));
        }

        let total_rounds = plan.games.len();
        if *current_index + 1 < total_rounds {
            *current_index += 1;
            *answered_current = false;
            *current_round = None;
            return Ok(AdvanceResult { finished: false });
        }

        let final_score = *score;
        self.state = QuizState::Finished {
            score: final_score,
            total_rounds,
        };

        Ok(AdvanceResult { finished: true })
    }

    pub fn final_score(&self) -> Result<FinalScore, QuizError> {
        let QuizState::Finished {
            score,
            total_rounds,
        } = &self.state
        else {
            return Err(QuizError::InvalidState("final_score"));
        };

        Ok(FinalScore::from_score(*score, *total_rounds))
    }

    /// Discards all progress and returns to the idle state.
    pub fn reset(&mut self) {
        self.state = QuizState::NotStarted;
    }
}
