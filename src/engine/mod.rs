//! Deterministic scoring engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed explicitly into every generating function
//! - Stable lock ordering (by id)
//! - No rendering, timers, or platform dependencies
//!
//! The UI layer owns presentation and the countdown; it feeds clicks and
//! answers into [`GameSession`] and renders what comes back.

pub mod lock;
pub mod problem;
pub mod score;
pub mod session;

pub use lock::{Lock, LockState, initialize_locks};
pub use problem::{Difficulty, Problem, generate_problem};
pub use score::{
    EngineError, JackpotResult, calculate_jackpots, calculate_points, calculate_total_score,
    time_bonus,
};
pub use session::{AnswerOutcome, GameOutcome, GameSession};
