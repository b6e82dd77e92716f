//! Score, combo streak, and spawn budget.

use crate::judge::Judgment;

/// Counters owned by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    combo: u32,
    spawns_remaining: u32,
    total_spawns: u32,
}

impl Scoreboard {
    pub fn new(total_spawns: u32) -> Self {
        Self {
            score: 0,
            combo: 0,
            spawns_remaining: total_spawns,
            total_spawns,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn spawns_remaining(&self) -> u32 {
        self.spawns_remaining
    }

    pub fn total_spawns(&self) -> u32 {
        self.total_spawns
    }

    /// Apply a judgment: hits add points and extend the streak, anything else
    /// breaks it.
    pub fn apply(&mut self, judgment: &Judgment) {
        if judgment.verdict.is_hit() {
            self.score = self.score.saturating_add(judgment.points);
            self.combo = self.combo.saturating_add(1);
        } else {
            self.combo = 0;
        }
    }

    /// Unjudged expiry.
    pub fn break_combo(&mut self) {
        self.combo = 0;
    }

    /// Consume one unit of spawn budget. Returns false once exhausted.
    pub fn take_spawn(&mut self) -> bool {
        if self.spawns_remaining == 0 {
            return false;
        }
        self.spawns_remaining -= 1;
        true
    }

    pub fn budget_exhausted(&self) -> bool {
        self.spawns_remaining == 0
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.total_spawns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    #[test]
    fn hits_accumulate_and_misses_reset_combo() {
        let mut sb = Scoreboard::new(10);
        sb.apply(&Judgment {
            verdict: Verdict::Nice,
            points: 10,
        });
        sb.apply(&Judgment {
            verdict: Verdict::Perfect,
            points: 22,
        });
        assert_eq!(sb.score(), 32);
        assert_eq!(sb.combo(), 2);

        sb.apply(&Judgment::miss(Verdict::Incorrect));
        assert_eq!(sb.score(), 32);
        assert_eq!(sb.combo(), 0);
    }

    #[test]
    fn spawn_budget_never_underflows() {
        let mut sb = Scoreboard::new(2);
        assert!(sb.take_spawn());
        assert!(sb.take_spawn());
        assert!(!sb.take_spawn());
        assert_eq!(sb.spawns_remaining(), 0);
        assert!(sb.budget_exhausted());
    }

    #[test]
    fn reset_restores_budget() {
        let mut sb = Scoreboard::new(3);
        sb.take_spawn();
        sb.apply(&Judgment {
            verdict: Verdict::Nice,
            points: 10,
        });
        sb.reset();
        assert_eq!(sb, Scoreboard::new(3));
    }
}
