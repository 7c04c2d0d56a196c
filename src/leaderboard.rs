//! Session leaderboard
//!
//! Keeps the best runs of the current session in memory. Runs are ranked by
//! pecans eaten, then by field generations survived; a run only displaces an
//! equal one if it strictly beats it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Runs kept on the board
pub const MAX_ENTRIES: usize = 10;

/// One finished (or cut-off) run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Pecans eaten
    pub score: u32,
    /// Field generations survived, the first row included
    pub generations: u64,
    /// Seconds of play
    pub seconds: f32,
}

impl RunRecord {
    pub fn from_state(state: &crate::sim::GameState) -> Self {
        Self {
            score: state.score,
            generations: state.generation,
            seconds: state.elapsed_secs(),
        }
    }

    /// Board order: better runs compare as `Less`
    fn board_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(other.generations.cmp(&self.generations))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<RunRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn entries(&self) -> &[RunRecord] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&RunRecord> {
        self.entries.first()
    }

    /// Index the run would land at, ties going after existing runs
    fn slot_for(&self, run: &RunRecord) -> usize {
        self.entries
            .partition_point(|e| e.board_cmp(run) != Ordering::Greater)
    }

    /// 1-indexed rank the run would get, None if the board is full of
    /// runs at least as good
    pub fn potential_rank(&self, run: &RunRecord) -> Option<usize> {
        let slot = self.slot_for(run);
        (slot < MAX_ENTRIES).then_some(slot + 1)
    }

    /// Record a run, returning its rank if it made the board
    pub fn record(&mut self, run: RunRecord) -> Option<usize> {
        let rank = self.potential_rank(&run)?;
        self.entries.insert(rank - 1, run);
        self.entries.truncate(MAX_ENTRIES);
        log::info!(
            "Run with {} pecans over {} rows ranked #{}",
            run.score,
            run.generations,
            rank
        );
        Some(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, generations: u64) -> RunRecord {
        RunRecord {
            score,
            generations,
            seconds: generations as f32 * 2.1,
        }
    }

    #[test]
    fn test_sorted_by_score() {
        let mut board = Leaderboard::new();
        assert_eq!(board.record(run(3, 4)), Some(1));
        assert_eq!(board.record(run(7, 9)), Some(1));
        assert_eq!(board.record(run(5, 6)), Some(2));
        let order: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(order, vec![7, 5, 3]);
        assert_eq!(board.best().map(|e| e.score), Some(7));
    }

    #[test]
    fn test_equal_score_breaks_on_generations() {
        let mut board = Leaderboard::new();
        board.record(run(4, 5));
        board.record(run(4, 12));
        assert_eq!(board.potential_rank(&run(4, 8)), Some(2));
        assert_eq!(board.record(run(4, 8)), Some(2));
        let gens: Vec<u64> = board.entries().iter().map(|e| e.generations).collect();
        assert_eq!(gens, vec![12, 8, 5]);
    }

    #[test]
    fn test_exact_tie_ranks_below() {
        let mut board = Leaderboard::new();
        board.record(run(2, 3));
        assert_eq!(board.record(run(2, 3)), Some(2));
    }

    #[test]
    fn test_pecanless_runs_still_rank() {
        let mut board = Leaderboard::new();
        board.record(run(1, 2));
        assert_eq!(board.record(run(0, 20)), Some(2));
    }

    #[test]
    fn test_full_board_needs_to_beat_last() {
        let mut board = Leaderboard::new();
        for s in 1..=MAX_ENTRIES as u32 {
            board.record(run(s, 3));
        }
        assert_eq!(board.entries().len(), MAX_ENTRIES);
        assert_eq!(board.potential_rank(&run(1, 3)), None);
        assert_eq!(board.record(run(1, 2)), None);
        // Same pecans as the last entry but more rows survived
        assert_eq!(board.record(run(1, 4)), Some(MAX_ENTRIES));
        assert_eq!(board.record(run(50, 1)), Some(1));
        assert_eq!(board.entries().len(), MAX_ENTRIES);
        assert_eq!(board.entries().last().map(|e| e.score), Some(2));
    }
}
