//! Browser platform facade
//!
//! Marshals the engine across the JS boundary as JSON values. Nothing here
//! renders or owns DOM state; the front end draws the board, runs the
//! countdown, and calls back in with clicks and answers.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::engine::GameSession;

    /// Install the panic hook and console logger. Runs once at module load.
    #[wasm_bindgen(start)]
    pub fn init() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }

    /// One game session held behind the JS boundary
    #[wasm_bindgen]
    pub struct Game {
        session: GameSession,
    }

    #[wasm_bindgen]
    impl Game {
        /// Start a game; omit the seed for a fresh random board
        #[wasm_bindgen(constructor)]
        pub fn new(seed: Option<u64>) -> Game {
            let seed = seed.unwrap_or_else(rand::random);
            Game {
                session: GameSession::new(seed),
            }
        }

        pub fn seed(&self) -> u64 {
            self.session.seed
        }

        /// Current lock collection as a JSON array, id order
        pub fn locks(&self) -> Result<String, JsError> {
            serde_json::to_string(&self.session.locks).map_err(JsError::from)
        }

        /// Submit an answer for a lock; returns the answer outcome as JSON
        pub fn submit_answer(&mut self, lock_id: u32, answer: i32) -> Result<String, JsError> {
            let outcome = self
                .session
                .submit_answer(lock_id, answer)
                .map_err(|e| JsError::new(&e.to_string()))?;
            serde_json::to_string(&outcome).map_err(JsError::from)
        }

        pub fn solved_count(&self) -> usize {
            self.session.solved_count()
        }

        pub fn can_finish(&self) -> bool {
            self.session.can_finish()
        }

        /// Settle the run and return the full game outcome as JSON
        pub fn finish(&self, time_remaining_secs: u32) -> Result<String, JsError> {
            serde_json::to_string(&self.session.finish(time_remaining_secs)).map_err(JsError::from)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
