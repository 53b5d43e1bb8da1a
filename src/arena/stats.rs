//! Aggregate results over a series of matches.

use serde::{Deserialize, Serialize};

use crate::core::Payoff;

use super::game::{EndReason, MatchResult};

/// Win, draw and length totals over a series of matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Matches recorded.
    pub matches: u32,

    /// Matches won by the maximizer.
    pub max_wins: u32,

    /// Matches won by the minimizer.
    pub min_wins: u32,

    /// Draws reached by the game's own rules.
    pub rule_draws: u32,

    /// Draws adjudicated by repetition.
    pub repetition_draws: u32,

    /// Draws adjudicated by the move limit.
    pub move_limit_draws: u32,

    /// Moves played across all matches.
    pub total_moves: u64,
}

impl MatchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one match.
    pub fn record(&mut self, result: &MatchResult) {
        self.matches += 1;
        self.total_moves += result.moves as u64;

        match (result.payoff, result.end_reason) {
            (Payoff::MaxWins, _) => self.max_wins += 1,
            (Payoff::MinWins, _) => self.min_wins += 1,
            (Payoff::Draw, EndReason::Terminal) => self.rule_draws += 1,
            (Payoff::Draw, EndReason::Repetition) => self.repetition_draws += 1,
            (Payoff::Draw, EndReason::MoveLimit) => self.move_limit_draws += 1,
        }
    }

    /// Combine with statistics from another series.
    pub fn merge(&mut self, other: &MatchStats) {
        self.matches += other.matches;
        self.max_wins += other.max_wins;
        self.min_wins += other.min_wins;
        self.rule_draws += other.rule_draws;
        self.repetition_draws += other.repetition_draws;
        self.move_limit_draws += other.move_limit_draws;
        self.total_moves += other.total_moves;
    }

    /// Draws of any kind.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.rule_draws + self.repetition_draws + self.move_limit_draws
    }

    /// Fraction of matches won by the maximizer.
    #[must_use]
    pub fn max_win_rate(&self) -> f64 {
        self.rate(self.max_wins)
    }

    /// Fraction of matches won by the minimizer.
    #[must_use]
    pub fn min_win_rate(&self) -> f64 {
        self.rate(self.min_wins)
    }

    /// Fraction of matches drawn.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws())
    }

    /// Average moves per match.
    #[must_use]
    pub fn average_moves(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.matches)
        }
    }

    fn rate(&self, count: u32) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(self.matches)
        }
    }
}
