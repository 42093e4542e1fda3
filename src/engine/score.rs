//! Points, jackpots and final score
//!
//! Pure arithmetic over the lock collection. Nothing here touches the RNG;
//! given the same locks these functions always produce the same numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lock::Lock;
use crate::consts::*;

/// Errors from feeding the engine malformed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Attempt number outside 1..=2
    InvalidAttempt(u32),
    /// Lock data fails basic validity (zero coin value)
    InvalidLock(u32),
    /// Lock is in a terminal state and accepts no more answers
    LockClosed(u32),
    /// No lock with this id on the board
    UnknownLock(u32),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidAttempt(n) => {
                write!(f, "invalid attempt number {n} (expected 1 or 2)")
            }
            EngineError::InvalidLock(id) => write!(f, "invalid lock {id}: zero coin value"),
            EngineError::LockClosed(id) => write!(f, "lock {id} no longer accepts answers"),
            EngineError::UnknownLock(id) => write!(f, "no lock with id {id}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Jackpot outcome, recomputed once at game end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JackpotResult {
    pub jackpot: bool,
    pub mega_jackpot: bool,
    pub jackpot_bonus: u32,
}

/// Points awarded for opening `lock` on the given attempt.
///
/// The multiplier only counts when `is_multiplier` is set; a stray
/// `multiplier_value` on a non-multiplier lock must never leak into scoring.
pub fn calculate_points(lock: &Lock, attempt_number: u32) -> Result<u32, EngineError> {
    if lock.coin_value == 0 {
        return Err(EngineError::InvalidLock(lock.id));
    }

    let base = lock.base_points();
    let multiplier = if lock.is_multiplier {
        // Zero would silently erase the reward; treat it as unset
        lock.multiplier_value.max(1)
    } else {
        1
    };

    match attempt_number {
        1 => Ok(base * multiplier),
        // floor(base * 0.5 * multiplier)
        2 => Ok(base * multiplier / 2),
        n => Err(EngineError::InvalidAttempt(n)),
    }
}

/// Evaluate jackpot eligibility across the whole board.
///
/// Below four solved locks nothing is evaluated, regardless of how many of
/// those solves were first-attempt.
pub fn calculate_jackpots(locks: &[Lock]) -> JackpotResult {
    let first_attempt_correct = locks.iter().filter(|l| l.first_attempt_correct).count();
    let total_solved = locks.iter().filter(|l| l.solved).count();

    if total_solved < JACKPOT_MIN_SOLVED {
        return JackpotResult::default();
    }

    let jackpot = first_attempt_correct >= JACKPOT_FIRST_TRY_THRESHOLD;
    let mega_jackpot = first_attempt_correct == MEGA_JACKPOT_FIRST_TRY;

    JackpotResult {
        jackpot,
        mega_jackpot,
        jackpot_bonus: if jackpot { JACKPOT_BONUS } else { 0 },
    }
}

/// Final score: earned points plus jackpot and time bonuses. The mega
/// jackpot doubles the whole sum, bonuses included.
pub fn calculate_total_score(locks: &[Lock], jackpots: &JackpotResult, time_bonus: u32) -> u32 {
    let base: u32 = locks.iter().map(|l| l.points_earned).sum();
    let mut total = base + jackpots.jackpot_bonus + time_bonus;

    if jackpots.mega_jackpot {
        total *= 2;
    }

    total
}

/// Step table mapping remaining time to a coin bonus. The countdown itself is
/// UI-owned; only the mapping lives in the engine.
pub fn time_bonus(time_remaining_secs: u32) -> u32 {
    match time_remaining_secs {
        240.. => 50,
        180.. => 40,
        120.. => 30,
        60.. => 20,
        _ => 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::problem::Difficulty;
    use crate::engine::lock::LockState;

    fn lock(difficulty: Difficulty, coin_value: u32) -> Lock {
        Lock {
            id: 1,
            difficulty,
            question: "1 + 1".into(),
            answer: 2,
            options: vec![2, 3, 4, 5],
            coin_value,
            is_multiplier: false,
            multiplier_value: 1,
            state: LockState::Locked,
            attempts: 0,
            solved: false,
            points_earned: 0,
            first_attempt_correct: false,
        }
    }

    fn solved_lock(first_attempt: bool, points: u32) -> Lock {
        let mut l = lock(Difficulty::Easy, 15);
        l.solved = true;
        l.points_earned = points;
        l.first_attempt_correct = first_attempt;
        l.attempts = if first_attempt { 1 } else { 2 };
        l.state = if first_attempt {
            LockState::Jackpot
        } else {
            LockState::Solved
        };
        l
    }

    #[test]
    fn test_points_plain_lock() {
        let l = lock(Difficulty::Easy, 15);
        assert_eq!(calculate_points(&l, 1), Ok(15));
        // floor(7.5)
        assert_eq!(calculate_points(&l, 2), Ok(7));
    }

    #[test]
    fn test_points_multiplier_lock() {
        let mut l = lock(Difficulty::Medium, 32);
        l.is_multiplier = true;
        l.multiplier_value = 4;
        assert_eq!(calculate_points(&l, 1), Ok(128));
        // floor(16 * 4)
        assert_eq!(calculate_points(&l, 2), Ok(64));
    }

    #[test]
    fn test_multiplier_ignored_without_flag() {
        let mut l = lock(Difficulty::Hard, 50);
        // Corrupted lock: multiplier value set but flag down
        l.multiplier_value = 6;
        assert_eq!(calculate_points(&l, 1), Ok(50));
        assert_eq!(calculate_points(&l, 2), Ok(25));
    }

    #[test]
    fn test_zero_multiplier_value_treated_as_unset() {
        let mut l = lock(Difficulty::Easy, 10);
        l.is_multiplier = true;
        l.multiplier_value = 0;
        assert_eq!(calculate_points(&l, 1), Ok(10));
    }

    #[test]
    fn test_points_errors() {
        let l = lock(Difficulty::Easy, 15);
        assert_eq!(calculate_points(&l, 0), Err(EngineError::InvalidAttempt(0)));
        assert_eq!(calculate_points(&l, 3), Err(EngineError::InvalidAttempt(3)));

        let bad = lock(Difficulty::Easy, 0);
        assert_eq!(calculate_points(&bad, 1), Err(EngineError::InvalidLock(1)));
    }

    #[test]
    fn test_jackpots_below_threshold() {
        // Three first-attempt solves: too few solved for any evaluation
        let locks: Vec<Lock> = (0..3).map(|_| solved_lock(true, 15)).collect();
        assert_eq!(calculate_jackpots(&locks), JackpotResult::default());
    }

    #[test]
    fn test_jackpot_eight_first_attempts() {
        let mut locks: Vec<Lock> = (0..8).map(|_| solved_lock(true, 15)).collect();
        locks.push(lock(Difficulty::Easy, 10));
        locks.push(lock(Difficulty::Easy, 11));

        let result = calculate_jackpots(&locks);
        assert!(result.jackpot);
        assert!(!result.mega_jackpot);
        assert_eq!(result.jackpot_bonus, 100);
    }

    #[test]
    fn test_mega_jackpot_all_first_attempts() {
        let locks: Vec<Lock> = (0..10).map(|_| solved_lock(true, 15)).collect();
        let result = calculate_jackpots(&locks);
        assert!(result.jackpot);
        assert!(result.mega_jackpot);
        assert_eq!(result.jackpot_bonus, 100);
    }

    #[test]
    fn test_second_attempt_solves_do_not_count_toward_jackpot() {
        let locks: Vec<Lock> = (0..10).map(|_| solved_lock(false, 7)).collect();
        let result = calculate_jackpots(&locks);
        assert!(!result.jackpot);
        assert!(!result.mega_jackpot);
        assert_eq!(result.jackpot_bonus, 0);
    }

    #[test]
    fn test_total_score_plain() {
        let locks: Vec<Lock> = (0..5).map(|_| solved_lock(false, 10)).collect();
        let jackpots = calculate_jackpots(&locks);
        assert_eq!(calculate_total_score(&locks, &jackpots, 20), 70);
    }

    #[test]
    fn test_total_score_mega_doubles_everything() {
        let locks: Vec<Lock> = (0..10).map(|_| solved_lock(true, 15)).collect();
        let jackpots = calculate_jackpots(&locks);
        // (150 + 100 + 50) * 2
        assert_eq!(calculate_total_score(&locks, &jackpots, 50), 600);
    }

    #[test]
    fn test_time_bonus_steps() {
        assert_eq!(time_bonus(300), 50);
        assert_eq!(time_bonus(240), 50);
        assert_eq!(time_bonus(239), 40);
        assert_eq!(time_bonus(180), 40);
        assert_eq!(time_bonus(179), 30);
        assert_eq!(time_bonus(120), 30);
        assert_eq!(time_bonus(119), 20);
        assert_eq!(time_bonus(60), 20);
        assert_eq!(time_bonus(59), 10);
        assert_eq!(time_bonus(0), 10);
    }
}
