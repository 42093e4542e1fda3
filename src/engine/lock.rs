//! Lock state and board initialization
//!
//! Everything the UI needs to render a lock lives here. Locks are built in
//! two passes: generate all ten with default reward flags, then annotate
//! exactly one lock per tier as the multiplier carrier. The two-pass shape is
//! what guarantees the one-per-tier invariant regardless of generation order.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::problem::{Difficulty, generate_problem};

/// Lifecycle of a single lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    /// Accepting answers
    Locked,
    /// Opened on the second attempt
    Solved,
    /// Two wrong answers; permanently shut
    Disabled,
    /// Opened on the first attempt
    Jackpot,
}

impl LockState {
    /// Terminal states accept no further submissions
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LockState::Locked)
    }
}

/// One puzzle unit on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    /// Stable id, assigned 1..=10 in tier order
    pub id: u32,
    pub difficulty: Difficulty,
    pub question: String,
    pub answer: i32,
    /// Correct answer plus three decoys, shuffled
    pub options: Vec<i32>,
    /// Base reward, unique within the tier
    pub coin_value: u32,
    /// Exactly one lock per tier carries the tier multiplier
    pub is_multiplier: bool,
    /// Tier constant when `is_multiplier`, otherwise 1
    pub multiplier_value: u32,
    pub state: LockState,
    pub attempts: u32,
    pub solved: bool,
    pub points_earned: u32,
    pub first_attempt_correct: bool,
}

impl Lock {
    /// Base points are the coin value; separate name kept for the scoring
    /// formulas, which speak in points.
    pub fn base_points(&self) -> u32 {
        self.coin_value
    }
}

/// Draw a coin value the tier hasn't used yet. Falls back to the full range
/// if the pool is somehow exhausted (cannot happen with 11-value pools and at
/// most 4 locks per tier).
fn draw_coin_value<R: Rng + ?Sized>(
    rng: &mut R,
    difficulty: Difficulty,
    used: &[u32],
) -> u32 {
    let (lo, hi) = difficulty.coin_range();
    let available: Vec<u32> = (lo..=hi).filter(|v| !used.contains(v)).collect();
    match available.choose(rng) {
        Some(&value) => value,
        None => rng.random_range(lo..=hi),
    }
}

/// Build a fresh board: ten locks, 4 easy / 3 medium / 3 hard, ids ascending,
/// one multiplier lock per tier.
pub fn initialize_locks<R: Rng + ?Sized>(rng: &mut R) -> Vec<Lock> {
    let mut locks = Vec::with_capacity(crate::consts::TOTAL_LOCKS);

    // Pass 1: generate every lock with default reward flags
    let mut next_id = 1;
    for difficulty in Difficulty::ALL {
        let mut used_coins: Vec<u32> = Vec::new();
        for _ in 0..difficulty.lock_count() {
            let problem = generate_problem(rng, difficulty);
            let coin_value = draw_coin_value(rng, difficulty, &used_coins);
            used_coins.push(coin_value);

            locks.push(Lock {
                id: next_id,
                difficulty,
                question: problem.question,
                answer: problem.answer,
                options: problem.options,
                coin_value,
                is_multiplier: false,
                multiplier_value: 1,
                state: LockState::Locked,
                attempts: 0,
                solved: false,
                points_earned: 0,
                first_attempt_correct: false,
            });
            next_id += 1;
        }
    }

    // Pass 2: annotate one multiplier lock per tier
    for difficulty in Difficulty::ALL {
        let tier: Vec<usize> = locks
            .iter()
            .enumerate()
            .filter(|(_, l)| l.difficulty == difficulty)
            .map(|(i, _)| i)
            .collect();
        if let Some(&chosen) = tier.choose(rng) {
            locks[chosen].is_multiplier = true;
            locks[chosen].multiplier_value = difficulty.multiplier_value();
        }
    }

    for difficulty in Difficulty::ALL {
        debug_assert_eq!(
            locks
                .iter()
                .filter(|l| l.difficulty == difficulty && l.is_multiplier)
                .count(),
            1
        );
    }

    // Board order is id order
    locks.sort_by_key(|l| l.id);

    log::debug!(
        "initialized {} locks, multipliers at {:?}",
        locks.len(),
        locks
            .iter()
            .filter(|l| l.is_multiplier)
            .map(|l| (l.id, l.multiplier_value))
            .collect::<Vec<_>>()
    );

    locks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn board(seed: u64) -> Vec<Lock> {
        let mut rng = Pcg32::seed_from_u64(seed);
        initialize_locks(&mut rng)
    }

    #[test]
    fn test_board_shape() {
        let locks = board(1);
        assert_eq!(locks.len(), TOTAL_LOCKS);

        let count =
            |d: Difficulty| locks.iter().filter(|l| l.difficulty == d).count();
        assert_eq!(count(Difficulty::Easy), EASY_LOCKS);
        assert_eq!(count(Difficulty::Medium), MEDIUM_LOCKS);
        assert_eq!(count(Difficulty::Hard), HARD_LOCKS);

        for (i, lock) in locks.iter().enumerate() {
            assert_eq!(lock.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_fresh_lock_defaults() {
        for lock in board(2) {
            assert_eq!(lock.state, LockState::Locked);
            assert_eq!(lock.attempts, 0);
            assert!(!lock.solved);
            assert_eq!(lock.points_earned, 0);
            assert!(!lock.first_attempt_correct);
            assert_eq!(lock.options.len(), 4);
            assert!(lock.options.contains(&lock.answer));
        }
    }

    #[test]
    fn test_one_multiplier_per_tier() {
        for seed in 0..100 {
            let locks = board(seed);
            for difficulty in Difficulty::ALL {
                let tier: Vec<&Lock> = locks
                    .iter()
                    .filter(|l| l.difficulty == difficulty)
                    .collect();
                let multipliers: Vec<&&Lock> =
                    tier.iter().filter(|l| l.is_multiplier).collect();
                assert_eq!(multipliers.len(), 1, "seed {seed}, tier {difficulty:?}");
                assert_eq!(
                    multipliers[0].multiplier_value,
                    difficulty.multiplier_value()
                );
                for lock in tier.iter().filter(|l| !l.is_multiplier) {
                    assert_eq!(lock.multiplier_value, 1, "seed {seed}, lock {}", lock.id);
                }
            }
        }
    }

    #[test]
    fn test_coin_values_unique_and_in_range() {
        for seed in 0..100 {
            let locks = board(seed);
            for difficulty in Difficulty::ALL {
                let (lo, hi) = difficulty.coin_range();
                let coins: Vec<u32> = locks
                    .iter()
                    .filter(|l| l.difficulty == difficulty)
                    .map(|l| l.coin_value)
                    .collect();
                for &c in &coins {
                    assert!((lo..=hi).contains(&c), "seed {seed}: coin {c} out of range");
                }
                for (i, a) in coins.iter().enumerate() {
                    for b in &coins[i + 1..] {
                        assert_ne!(a, b, "seed {seed}: duplicate coin in {difficulty:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        assert_eq!(board(777), board(777));
        assert_ne!(board(777), board(778));
    }

    proptest! {
        #[test]
        fn prop_board_invariants(seed in any::<u64>()) {
            let locks = board(seed);
            prop_assert_eq!(locks.len(), TOTAL_LOCKS);
            for difficulty in Difficulty::ALL {
                let tier: Vec<&Lock> = locks
                    .iter()
                    .filter(|l| l.difficulty == difficulty)
                    .collect();
                prop_assert_eq!(tier.len(), difficulty.lock_count());
                prop_assert_eq!(tier.iter().filter(|l| l.is_multiplier).count(), 1);
                for lock in tier {
                    if !lock.is_multiplier {
                        prop_assert_eq!(lock.multiplier_value, 1);
                    }
                }
            }
        }
    }
}
