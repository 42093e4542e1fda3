//! Lock Rush entry point
//!
//! Native builds run a scripted demo game against the engine; the browser
//! build drives the engine through the wasm facade in `platform` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lock_rush::{GameSession, Lock};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);
    log::info!("Lock Rush demo, seed {seed}");

    let mut session = GameSession::new(seed);

    println!("Board (seed {seed}):");
    for lock in &session.locks {
        println!(
            "  lock {:2} [{:6}] {:16} coins {:2}{}",
            lock.id,
            lock.difficulty.as_str(),
            lock.question,
            lock.coin_value,
            if lock.is_multiplier {
                format!("  x{}", lock.multiplier_value)
            } else {
                String::new()
            }
        );
    }

    // Scripted run: odd locks open first try, even locks need both attempts
    let locks: Vec<Lock> = session.locks.clone();
    for lock in &locks {
        if lock.id % 2 == 0 {
            let wrong = lock
                .options
                .iter()
                .copied()
                .find(|&o| o != lock.answer)
                .unwrap_or(lock.answer + 1);
            let _ = session.submit_answer(lock.id, wrong);
        }
        let _ = session.submit_answer(lock.id, lock.answer);
    }

    let outcome = session.finish(150);
    println!();
    println!("Solved {}/10", outcome.solved_count);
    println!(
        "Jackpot: {}  Mega: {}  Bonus: {}",
        outcome.jackpots.jackpot, outcome.jackpots.mega_jackpot, outcome.jackpots.jackpot_bonus
    );
    println!("Time bonus: {}", outcome.time_bonus);
    println!("Total score: {}", outcome.total_score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM builds are driven from JS through the platform facade
}
