//! Lock Rush - a timed lock-breaking arithmetic puzzle game
//!
//! Core modules:
//! - `engine`: Deterministic scoring engine (problems, locks, points, jackpots)
//! - `platform`: Browser/native boundary glue
//!
//! The engine is pure: every function that draws randomness takes the RNG
//! explicitly, so a fixed seed reproduces the full board and, given the same
//! answer sequence, the same final score.

pub mod engine;
pub mod platform;

pub use engine::{
    AnswerOutcome, Difficulty, EngineError, GameOutcome, GameSession, JackpotResult, Lock,
    LockState, Problem, calculate_jackpots, calculate_points, calculate_total_score,
    generate_problem, initialize_locks, time_bonus,
};

/// Game configuration constants
pub mod consts {
    /// Locks per difficulty tier on a fresh board
    pub const EASY_LOCKS: usize = 4;
    pub const MEDIUM_LOCKS: usize = 3;
    pub const HARD_LOCKS: usize = 3;
    /// Total locks on the board
    pub const TOTAL_LOCKS: usize = EASY_LOCKS + MEDIUM_LOCKS + HARD_LOCKS;

    /// Coin value ranges per tier (inclusive)
    pub const EASY_COIN_RANGE: (u32, u32) = (10, 20);
    pub const MEDIUM_COIN_RANGE: (u32, u32) = (30, 40);
    pub const HARD_COIN_RANGE: (u32, u32) = (50, 60);

    /// Multiplier carried by the one multiplier lock per tier
    pub const EASY_MULTIPLIER: u32 = 2;
    pub const MEDIUM_MULTIPLIER: u32 = 4;
    pub const HARD_MULTIPLIER: u32 = 6;

    /// Maximum answer submissions per lock
    pub const MAX_ATTEMPTS: u32 = 2;

    /// Minimum solved locks before jackpots are evaluated at all
    pub const JACKPOT_MIN_SOLVED: usize = 4;
    /// First-attempt solves needed for the jackpot bonus
    pub const JACKPOT_FIRST_TRY_THRESHOLD: usize = 8;
    /// First-attempt solves needed for the mega jackpot (every lock)
    pub const MEGA_JACKPOT_FIRST_TRY: usize = 10;
    /// Flat coin bonus awarded with the jackpot
    pub const JACKPOT_BONUS: u32 = 100;

    /// Round length in seconds (the countdown itself is owned by the UI)
    pub const GAME_DURATION_SECS: u32 = 300;

    /// Decoy sampling window around the correct answer (inclusive offsets)
    pub const DECOY_WINDOW_LO: i32 = -10;
    pub const DECOY_WINDOW_HI: i32 = 9;
    /// Draws in the preferred window before falling back to a wider one
    pub const DECOY_MAX_DRAWS: u32 = 64;
}
