//! High score collaborator
//!
//! The session reads the stored high score once when it is created and writes
//! it back when a finished game beats it. Where the value lives is up to the
//! host; storage failures stay inside the implementation.

/// Persistent storage for the best score.
pub trait HighScoreStore {
    /// Stored high score, or `None` when nothing is stored or storage is unavailable.
    fn load_high_score(&mut self) -> Option<u32>;

    /// Replace the stored high score.
    fn save_high_score(&mut self, score: u32);
}

/// Keeps the high score in memory for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScore {
    value: Option<u32>,
}

impl MemoryHighScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self { value: Some(value) }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load_high_score(&mut self) -> Option<u32> {
        self.value
    }

    fn save_high_score(&mut self, score: u32) {
        self.value = Some(score);
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load_high_score(&mut self) -> Option<u32> {
        (**self).load_high_score()
    }

    fn save_high_score(&mut self, score: u32) {
        (**self).save_high_score(score)
    }
}
