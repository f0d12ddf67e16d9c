use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// How a minigame turns its pattern list into a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlaybackMode {
    /// Keep the authored order.
    #[default]
    Sequential,
    /// Uniform random permutation, drawn once at start.
    Shuffle,
    /// Only the first pattern.
    Single,
}

impl PlaybackMode {
    /// Apply the mode to `list` in place.
    pub fn apply<T, R: Rng + ?Sized>(self, list: &mut Vec<T>, rng: &mut R) {
        match self {
            PlaybackMode::Sequential => {}
            PlaybackMode::Single => list.truncate(1),
            PlaybackMode::Shuffle => list.shuffle(rng),
        }
    }
}
