use ivy_model::{PlaybackMode, RhythmPattern};
use log::warn;
use rand::Rng;

/// The ordered patterns of one session and the position within them.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    patterns: Vec<RhythmPattern>,
    index: usize,
}

impl Playlist {
    /// Build a playlist from `patterns`, dropping unplayable ones, then apply
    /// `mode` once.
    pub fn build<R: Rng + ?Sized>(
        patterns: &[RhythmPattern],
        mode: PlaybackMode,
        rng: &mut R,
    ) -> Self {
        let mut list: Vec<RhythmPattern> = patterns
            .iter()
            .filter(|p| match p.validate() {
                Ok(()) => true,
                Err(issue) => {
                    warn!("Skipping pattern {}: {issue}", p.pattern_id);
                    false
                }
            })
            .cloned()
            .collect();
        mode.apply(&mut list, rng);
        Self {
            patterns: list,
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&RhythmPattern> {
        self.patterns.get(self.index)
    }

    pub fn patterns(&self) -> &[RhythmPattern] {
        &self.patterns
    }

    /// Move to the next pattern. Returns false when the playlist is exhausted;
    /// the index then stays on the last pattern.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 >= self.patterns.len() {
            return false;
        }
        self.index += 1;
        true
    }
}
