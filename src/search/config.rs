//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{Payoff, Result, SearchError};

/// Scoring constants for terminal and repeated positions.
///
/// All scores are from the maximizer's point of view. Draws and
/// repetitions are scored against the maximizer, which steers it away from
/// lines the defender could hold by repeating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Magnitude of a decided game (default: 1000).
    /// Must exceed every heuristic score so a proven result always dominates.
    pub win_score: f64,

    /// Value of a draw by rule (default: -900).
    /// Worse than any narrow heuristic disadvantage, better than a loss.
    pub draw_score: f64,

    /// Path occurrences at which the soft penalty applies (default: 2).
    pub soft_repetition: u32,

    /// Value returned at the soft threshold (default: -250).
    pub soft_repetition_score: f64,

    /// Path occurrences treated as a claimable draw (default: 3).
    pub forced_repetition: u32,

    /// Value returned at the forced threshold (default: -900).
    pub forced_repetition_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            win_score: 1000.0,
            draw_score: -900.0,
            soft_repetition: 2,
            soft_repetition_score: -250.0,
            forced_repetition: 3,
            forced_repetition_score: -900.0,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom terminal magnitude.
    pub fn with_win_score(mut self, score: f64) -> Self {
        self.win_score = score;
        self
    }

    /// Create a new config with a custom draw value.
    pub fn with_draw_score(mut self, score: f64) -> Self {
        self.draw_score = score;
        self
    }

    /// Create a new config with custom soft repetition threshold and value.
    pub fn with_soft_repetition(mut self, threshold: u32, score: f64) -> Self {
        self.soft_repetition = threshold;
        self.soft_repetition_score = score;
        self
    }

    /// Create a new config with custom forced repetition threshold and value.
    pub fn with_forced_repetition(mut self, threshold: u32, score: f64) -> Self {
        self.forced_repetition = threshold;
        self.forced_repetition_score = score;
        self
    }

    /// Score of a terminal position.
    #[must_use]
    pub fn terminal_score(&self, payoff: Payoff) -> f64 {
        match payoff {
            Payoff::MaxWins => self.win_score,
            Payoff::MinWins => -self.win_score,
            Payoff::Draw => self.draw_score,
        }
    }

    /// Score for a position seen `count` times on the current path, if the
    /// count has reached a repetition threshold.
    #[must_use]
    pub fn repetition_score(&self, count: u32) -> Option<f64> {
        if count >= self.forced_repetition {
            Some(self.forced_repetition_score)
        } else if count >= self.soft_repetition {
            Some(self.soft_repetition_score)
        } else {
            None
        }
    }

    /// Check the ordering constraints between the constants.
    ///
    /// `-win < forced < soft < win`, `-win < draw < win`, and
    /// `1 <= soft < forced`.
    pub fn validate(&self) -> Result<()> {
        let win = self.win_score;
        if !win.is_finite() || win <= 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "win_score must be finite and positive, got {win}"
            )));
        }
        if !(self.draw_score > -win && self.draw_score < win) {
            return Err(SearchError::InvalidConfig(format!(
                "draw_score {} must lie strictly inside (-{win}, {win})",
                self.draw_score
            )));
        }
        if self.soft_repetition == 0 || self.soft_repetition >= self.forced_repetition {
            return Err(SearchError::InvalidConfig(format!(
                "repetition thresholds must satisfy 1 <= soft ({}) < forced ({})",
                self.soft_repetition, self.forced_repetition
            )));
        }
        let (soft, forced) = (self.soft_repetition_score, self.forced_repetition_score);
        if !(forced > -win && forced < soft && soft < win) {
            return Err(SearchError::InvalidConfig(format!(
                "repetition scores must satisfy -{win} < forced ({forced}) < soft ({soft}) < {win}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.win_score, 1000.0);
        assert_eq!(config.soft_repetition, 2);
        assert_eq!(config.forced_repetition, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_win_score(10_000.0)
            .with_draw_score(-5000.0)
            .with_soft_repetition(2, -100.0)
            .with_forced_repetition(4, -5000.0);

        assert_eq!(config.win_score, 10_000.0);
        assert_eq!(config.draw_score, -5000.0);
        assert_eq!(config.forced_repetition, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_terminal_score() {
        let config = SearchConfig::default();
        assert_eq!(config.terminal_score(Payoff::MaxWins), 1000.0);
        assert_eq!(config.terminal_score(Payoff::MinWins), -1000.0);
        assert_eq!(config.terminal_score(Payoff::Draw), -900.0);
    }

    #[test]
    fn test_repetition_score_thresholds() {
        let config = SearchConfig::default();
        assert_eq!(config.repetition_score(0), None);
        assert_eq!(config.repetition_score(1), None);
        assert_eq!(config.repetition_score(2), Some(-250.0));
        assert_eq!(config.repetition_score(3), Some(-900.0));
        assert_eq!(config.repetition_score(7), Some(-900.0));
    }

    #[test]
    fn test_validate_rejects_inverted_repetition_scores() {
        let config = SearchConfig::default().with_soft_repetition(2, -950.0);
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        let config = SearchConfig::default().with_forced_repetition(2, -900.0);
        assert!(config.validate().is_err());

        let config = SearchConfig::default().with_soft_repetition(0, -250.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_draw_outside_win_range() {
        assert!(SearchConfig::default().with_draw_score(-1000.0).validate().is_err());
        assert!(SearchConfig::default().with_win_score(f64::INFINITY).validate().is_err());
        assert!(SearchConfig::default().with_draw_score(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_win_score(5000.0);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
