//! Minigame rules plugged into a [`RhythmSession`](crate::RhythmSession).
//!
//! The session owns timing, judging and playlist order. A minigame decides
//! which patterns to play, how each judged step moves trust, which cues to
//! show, and what the player earns at the end.

mod animal;
mod plant;

pub use animal::{ANIMAL_GOOD_TRUST, ANIMAL_MISS_TRUST, AnimalMinigame};
pub use plant::{PLANT_GOOD_TRUST, PLANT_MISS_TRUST, PLANT_STAGE_COUNT, PlantMinigame, yield_for};

use ivy_model::{PlaybackMode, RhythmPattern, Step};
use rand::RngCore;

use crate::error::StartError;
use crate::event::{Cue, Reward};
use crate::judge::Verdict;

/// A step that has just been judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgedStep {
    pub step: Step,
    /// Index of the judged step within its pattern.
    pub step_index: usize,
    pub pattern_index: usize,
    pub verdict: Verdict,
}

pub trait Minigame {
    fn name(&self) -> &str;

    /// Check the definition and emit start cues. An error aborts the start.
    fn on_start(&mut self, cues: &mut Vec<Cue>) -> Result<(), StartError>;

    /// Candidate patterns in authored order.
    fn patterns(&self) -> &[RhythmPattern];

    fn playback_mode(&self) -> PlaybackMode;

    fn on_beat(&mut self, _cues: &mut Vec<Cue>) {}

    /// React to a judged step and return the trust change.
    fn on_step_judged(
        &mut self,
        judged: &JudgedStep,
        rng: &mut dyn RngCore,
        cues: &mut Vec<Cue>,
    ) -> f32;

    /// Decide the reward from the final trust value.
    fn on_playlist_complete(&mut self, trust: f32) -> Reward;
}
