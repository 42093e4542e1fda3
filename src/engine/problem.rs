//! Arithmetic problem generation
//!
//! Every lock guards one generated problem: a question string, its unique
//! correct answer, and four shuffled answer options (the correct value plus
//! three decoys). All draws go through the caller's RNG so a seeded run
//! reproduces the same board.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Problem difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tiers in board order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Locks of this tier on a fresh board
    pub fn lock_count(&self) -> usize {
        match self {
            Difficulty::Easy => EASY_LOCKS,
            Difficulty::Medium => MEDIUM_LOCKS,
            Difficulty::Hard => HARD_LOCKS,
        }
    }

    /// Inclusive coin value range for the tier
    pub fn coin_range(&self) -> (u32, u32) {
        match self {
            Difficulty::Easy => EASY_COIN_RANGE,
            Difficulty::Medium => MEDIUM_COIN_RANGE,
            Difficulty::Hard => HARD_COIN_RANGE,
        }
    }

    /// Multiplier carried by the tier's one multiplier lock
    pub fn multiplier_value(&self) -> u32 {
        match self {
            Difficulty::Easy => EASY_MULTIPLIER,
            Difficulty::Medium => MEDIUM_MULTIPLIER,
            Difficulty::Hard => HARD_MULTIPLIER,
        }
    }
}

/// A generated arithmetic problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub question: String,
    pub answer: i32,
    /// Correct answer plus three decoys, shuffled
    pub options: Vec<i32>,
}

/// Generate a problem for the given difficulty tier
pub fn generate_problem<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Problem {
    let (question, answer) = match difficulty {
        Difficulty::Easy => easy_problem(rng),
        Difficulty::Medium => medium_problem(rng),
        Difficulty::Hard => hard_problem(rng),
    };

    // Medium subtraction (and one hard branch) can go negative. Decoys stay
    // positive regardless, so the correct answer sticks out when this
    // happens; log it so the oddity is visible during tuning.
    if answer <= 0 {
        log::debug!("generated non-positive answer {answer} for {question:?}");
    }

    let mut options = vec![answer];
    options.extend(pick_decoys(rng, answer));
    options.shuffle(rng);

    Problem {
        question,
        answer,
        options,
    }
}

/// Addition or subtraction of two values in [1, 20]; subtraction is ordered
/// larger-first so the result is never negative. The larger operand renders
/// first for both operators.
fn easy_problem<R: Rng + ?Sized>(rng: &mut R) -> (String, i32) {
    let a: i32 = rng.random_range(1..=20);
    let b: i32 = rng.random_range(1..=20);
    let (hi, lo) = (a.max(b), a.min(b));
    if rng.random_bool(0.5) {
        (format!("{hi} + {lo}"), a + b)
    } else {
        (format!("{hi} - {lo}"), hi - lo)
    }
}

/// One of three forms, chosen uniformly. The subtraction branch keeps its
/// operand order as drawn, so the answer may be negative.
fn medium_problem<R: Rng + ?Sized>(rng: &mut R) -> (String, i32) {
    match rng.random_range(0..3) {
        0 => {
            let a: i32 = rng.random_range(10..=59);
            let b: i32 = rng.random_range(5..=34);
            (format!("{a} + {b}"), a + b)
        }
        1 => {
            let a: i32 = rng.random_range(20..=69);
            let b: i32 = rng.random_range(5..=24);
            (format!("{a} - {b}"), a - b)
        }
        _ => {
            let a: i32 = rng.random_range(2..=11);
            let b: i32 = rng.random_range(2..=11);
            (format!("{a} × {b}"), a * b)
        }
    }
}

/// Three-operand forms; results are accepted as-is, unclamped.
fn hard_problem<R: Rng + ?Sized>(rng: &mut R) -> (String, i32) {
    match rng.random_range(0..3) {
        0 => {
            let a: i32 = rng.random_range(20..=119);
            let b: i32 = rng.random_range(10..=59);
            let c: i32 = rng.random_range(5..=34);
            (format!("{a} + {b} - {c}"), a + b - c)
        }
        1 => {
            let a: i32 = rng.random_range(3..=14);
            let b: i32 = rng.random_range(3..=14);
            let c: i32 = rng.random_range(2..=11);
            (format!("{a} × {b} - {c}"), a * b - c)
        }
        _ => {
            let a: i32 = rng.random_range(20..=69);
            let b: i32 = rng.random_range(5..=24);
            let c: i32 = rng.random_range(5..=24);
            (format!("{a} - {b} + {c}"), a - b + c)
        }
    }
}

/// Pick three distinct positive decoys near the answer.
///
/// Draws from `answer - 10 ..= answer + 9` first, then from a wide positive
/// window, then sweeps upward from 1. The sweep guarantees termination even
/// for answers at or below zero, where the preferred window holds few (or no)
/// positive values.
fn pick_decoys<R: Rng + ?Sized>(rng: &mut R, answer: i32) -> Vec<i32> {
    let mut decoys: Vec<i32> = Vec::with_capacity(3);

    let mut draws = 0;
    while decoys.len() < 3 && draws < DECOY_MAX_DRAWS {
        draws += 1;
        let candidate = answer + rng.random_range(DECOY_WINDOW_LO..=DECOY_WINDOW_HI);
        if candidate > 0 && candidate != answer && !decoys.contains(&candidate) {
            decoys.push(candidate);
        }
    }

    // Fallback window: any positive value up to a little past the answer
    let hi = answer.max(1).saturating_add(20);
    let mut draws = 0;
    while decoys.len() < 3 && draws < DECOY_MAX_DRAWS {
        draws += 1;
        let candidate = rng.random_range(1..=hi);
        if candidate != answer && !decoys.contains(&candidate) {
            decoys.push(candidate);
        }
    }

    let mut candidate = 1;
    while decoys.len() < 3 {
        if candidate != answer && !decoys.contains(&candidate) {
            decoys.push(candidate);
        }
        candidate += 1;
    }

    decoys
}
