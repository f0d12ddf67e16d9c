use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of input a step asks for.
///
/// The judge treats every kind the same way (one tap per step); the kind is
/// carried through to the minigame so it can pick feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StepType {
    #[default]
    Tap,
    Hold,
    Rest,
}

/// One entry of a pattern's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "type", default)]
    pub step_type: StepType,
    /// Duration in beats, at least 1.
    #[serde(default = "default_step_beats")]
    pub beats: u32,
}

fn default_step_beats() -> u32 {
    1
}

impl Step {
    pub const fn new(step_type: StepType, beats: u32) -> Self {
        Self { step_type, beats }
    }

    pub const fn tap() -> Self {
        Self::new(StepType::Tap, 1)
    }
}

/// Reason a pattern cannot be played.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternIssue {
    #[error("sequence is empty")]
    EmptySequence,

    #[error("bpm must be at least 1")]
    ZeroBpm,

    #[error("step {index} has zero beats")]
    ZeroBeatStep { index: usize },

    #[error("hit window {value}s is not a finite non-negative number")]
    InvalidHitWindow { value: f32 },
}

/// A beat pattern: tempo, hit tolerance and an ordered step sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RhythmPattern {
    pub pattern_id: String,
    pub display_name: String,
    pub bpm: u32,
    pub hit_window_seconds: f32,
    pub sequence: Vec<Step>,
}

impl Default for RhythmPattern {
    fn default() -> Self {
        Self {
            pattern_id: String::new(),
            display_name: String::new(),
            bpm: 80,
            hit_window_seconds: 0.2,
            sequence: vec![
                Step::new(StepType::Tap, 1),
                Step::new(StepType::Tap, 1),
                Step::new(StepType::Hold, 2),
            ],
        }
    }
}

impl RhythmPattern {
    /// Create a pattern with default tempo, window and sequence.
    pub fn new(pattern_id: impl Into<String>) -> Self {
        let pattern_id = pattern_id.into();
        Self {
            display_name: pattern_id.clone(),
            pattern_id,
            ..Default::default()
        }
    }

    pub fn with_bpm(mut self, bpm: u32) -> Self {
        self.bpm = bpm;
        self
    }

    pub fn with_hit_window(mut self, seconds: f32) -> Self {
        self.hit_window_seconds = seconds;
        self
    }

    pub fn with_sequence(mut self, sequence: Vec<Step>) -> Self {
        self.sequence = sequence;
        self
    }

    /// Seconds between beats. A bpm of 0 is treated as 1.
    pub fn beat_interval(&self) -> f64 {
        60.0 / f64::from(self.bpm.max(1))
    }

    /// Number of steps in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.sequence.get(index)
    }

    /// Sum of step durations in beats.
    pub fn total_beats(&self) -> u32 {
        self.sequence.iter().map(|s| s.beats).sum()
    }

    /// Nominal length of the pattern in seconds.
    pub fn duration_seconds(&self) -> f64 {
        f64::from(self.total_beats()) * self.beat_interval()
    }

    /// Check that the pattern can be played to completion.
    pub fn validate(&self) -> Result<(), PatternIssue> {
        if self.sequence.is_empty() {
            return Err(PatternIssue::EmptySequence);
        }
        if self.bpm == 0 {
            return Err(PatternIssue::ZeroBpm);
        }
        if !self.hit_window_seconds.is_finite() || self.hit_window_seconds < 0.0 {
            return Err(PatternIssue::InvalidHitWindow {
                value: self.hit_window_seconds,
            });
        }
        if let Some(index) = self.sequence.iter().position(|s| s.beats == 0) {
            return Err(PatternIssue::ZeroBeatStep { index });
        }
        Ok(())
    }
}
