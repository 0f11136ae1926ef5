use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::models::GameRecord;

/// How decoy options are drawn for a round. `GenreMix` biases one decoy
/// towards the correct game's genre to make guessing harder.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DecoyStrategy {
    Uniform,
    GenreMix,
}

/// The games chosen for one quiz session, in round order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RoundPlan {
    pub games: Vec<GameRecord>,
}

/// One question instance: the correct game plus its decoys, already shuffled
/// into display order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Round {
    pub correct: GameRecord,
    pub options: Vec<GameRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoundSummary {
    pub total_rounds: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartResponse {
    pub session_id: Uuid,
    pub total_rounds: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoundView {
    pub index: usize,
    pub total_rounds: usize,
    pub description: String,
    pub options: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub selected_title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_title: String,
    pub score_so_far: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdvanceResult {
    pub finished: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinalScore {
    pub score: usize,
    pub total_rounds: usize,
    pub emoji: String,
    pub message: String,
}

impl FinalScore {
    pub fn from_score(score: usize, total_rounds: usize) -> Self {
        let (emoji, message) = result_message(score, total_rounds);

        Self {
            score,
            total_rounds,
            emoji: emoji.to_string(),
            message: message.to_string(),
        }
    }
}

/// Tiers are proportional so they hold for any configured round count.
fn result_message(score: usize, total: usize) -> (&'static str, &'static str) {
    if score == total {
        ("🏆", "Every answer landed like a headshot. Boom!")
    } else if score * 5 >= total * 4 {
        ("🌟", "One slip, but the rest were clean combos.")
    } else if score * 5 >= total * 3 {
        ("👾", "Not quite a speed run.")
    } else if score * 5 >= total * 2 {
        ("🕹️", "Button masher!")
    } else {
        ("📺", "Every expert was once a beginner.")
    }
}
