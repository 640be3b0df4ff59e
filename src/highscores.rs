//! Best-score tracking
//!
//! Read once at startup, written only when a session beats it. Never goes down.

use crate::persistence::HighScoreStore;

#[derive(Debug)]
pub struct HighScore<S: HighScoreStore> {
    best: u64,
    store: S,
}

impl<S: HighScoreStore> HighScore<S> {
    /// Load the stored best; an unreadable store starts from 0
    pub fn load(store: S) -> Self {
        let best = match store.load_high_score() {
            Ok(best) => {
                log::info!("Loaded high score {}", best);
                best
            }
            Err(e) => {
                log::warn!("Could not read high score, starting fresh: {}", e);
                0
            }
        };
        Self { best, store }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record `score` if it beats the best. Returns true when it did.
    ///
    /// A failed write keeps the in-memory best and is only logged.
    pub fn submit(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        if let Err(e) = self.store.save_high_score(score) {
            log::warn!("High score {} not persisted: {}", score, e);
        }
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
