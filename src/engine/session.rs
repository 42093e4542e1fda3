//! Game session driver
//!
//! Owns the lock collection for one timed run and enforces the two-attempt
//! state machine the board UI drives: clicks open a question, answers come
//! back through [`GameSession::submit_answer`], and [`GameSession::finish`]
//! settles the score. The countdown itself stays in the UI; the session only
//! sees the remaining seconds it is handed at the end.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lock::{Lock, LockState, initialize_locks};
use super::score::{
    EngineError, JackpotResult, calculate_jackpots, calculate_points, calculate_total_score,
    time_bonus,
};
use crate::consts::*;

/// What a single answer submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Lock state after the submission
    pub lock_state: LockState,
    /// Points awarded by this submission (0 for wrong answers)
    pub points_earned: u32,
    pub attempts_remaining: u32,
}

/// Terminal artifact handed to the end screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub locks: Vec<Lock>,
    pub total_score: u32,
    pub jackpots: JackpotResult,
    pub time_bonus: u32,
    pub solved_count: usize,
}

/// A single timed run over ten locks (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Board order is id order
    pub locks: Vec<Lock>,
}

impl GameSession {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let locks = initialize_locks(&mut rng);
        log::info!("session {seed}: board ready with {} locks", locks.len());
        Self { seed, locks }
    }

    pub fn lock(&self, id: u32) -> Option<&Lock> {
        self.locks.iter().find(|l| l.id == id)
    }

    pub fn solved_count(&self) -> usize {
        self.locks.iter().filter(|l| l.solved).count()
    }

    /// The end-run button unlocks once four locks are open
    pub fn can_finish(&self) -> bool {
        self.solved_count() >= JACKPOT_MIN_SOLVED
    }

    /// Apply one answer submission to a lock.
    ///
    /// Transitions: first correct answer goes to `Jackpot`, second correct to
    /// `Solved`, second wrong to `Disabled`; a first wrong answer keeps the
    /// lock in `Locked` with one attempt spent. Terminal locks reject further
    /// submissions.
    pub fn submit_answer(&mut self, lock_id: u32, answer: i32) -> Result<AnswerOutcome, EngineError> {
        let lock = self
            .locks
            .iter_mut()
            .find(|l| l.id == lock_id)
            .ok_or(EngineError::UnknownLock(lock_id))?;

        if lock.state.is_terminal() {
            return Err(EngineError::LockClosed(lock_id));
        }

        let attempt = lock.attempts + 1;
        let correct = answer == lock.answer;
        let mut points = 0;

        if correct {
            points = calculate_points(lock, attempt)?;
            lock.solved = true;
            lock.points_earned = points;
            if attempt == 1 {
                lock.first_attempt_correct = true;
                lock.state = LockState::Jackpot;
            } else {
                lock.state = LockState::Solved;
            }
        } else if attempt >= MAX_ATTEMPTS {
            lock.state = LockState::Disabled;
        }
        lock.attempts = attempt;

        log::debug!(
            "lock {lock_id}: attempt {attempt} {} -> {:?}",
            if correct { "correct" } else { "wrong" },
            lock.state
        );

        Ok(AnswerOutcome {
            correct,
            lock_state: lock.state,
            points_earned: points,
            attempts_remaining: MAX_ATTEMPTS - lock.attempts,
        })
    }

    /// Settle the run. Callable at time-up or from the early end-run button;
    /// jackpot evaluation handles the below-threshold case itself.
    pub fn finish(&self, time_remaining_secs: u32) -> GameOutcome {
        let time_bonus = time_bonus(time_remaining_secs);
        let jackpots = calculate_jackpots(&self.locks);
        let total_score = calculate_total_score(&self.locks, &jackpots, time_bonus);
        let solved_count = self.solved_count();

        log::info!(
            "session {}: finished with {solved_count} solved, score {total_score} (jackpot: {}, mega: {})",
            self.seed,
            jackpots.jackpot,
            jackpots.mega_jackpot
        );

        GameOutcome {
            locks: self.locks.clone(),
            total_score,
            jackpots,
            time_bonus,
            solved_count,
        }
    }
}
