use serde::Serialize;

use crate::judge::Verdict;

/// Good/miss counts and streaks for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JudgeTally {
    pub good_count: u32,
    pub miss_count: u32,
    pub streak: u32,
    pub best_streak: u32,
}

impl JudgeTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Good => {
                self.good_count += 1;
                self.streak += 1;
            }
            Verdict::Miss => {
                self.miss_count += 1;
                self.streak = 0;
            }
        }
        self.best_streak = self.best_streak.max(self.streak);
    }

    pub fn total(&self) -> u32 {
        self.good_count + self.miss_count
    }

    /// Percentage of good steps; 0 when nothing has been judged.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.good_count) / f64::from(total) * 100.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_breaks_on_miss() {
        let mut tally = JudgeTally::new();
        tally.record(Verdict::Good);
        tally.record(Verdict::Good);
        assert_eq!(tally.streak, 2);

        tally.record(Verdict::Miss);
        assert_eq!(tally.streak, 0);
        assert_eq!(tally.best_streak, 2);

        tally.record(Verdict::Good);
        assert_eq!(tally.streak, 1);
        assert_eq!(tally.best_streak, 2);
    }

    #[test]
    fn accuracy() {
        let mut tally = JudgeTally::new();
        assert_eq!(tally.accuracy(), 0.0);

        tally.record(Verdict::Good);
        tally.record(Verdict::Good);
        tally.record(Verdict::Good);
        tally.record(Verdict::Miss);
        assert!((tally.accuracy() - 75.0).abs() < 1e-9);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tally = JudgeTally::new();
        tally.record(Verdict::Good);
        tally.reset();
        assert_eq!(tally, JudgeTally::default());
    }
}
