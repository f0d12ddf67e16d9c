use ivy_model::StepType;
use serde::Serialize;

use crate::judge::Judgement;

/// Who an animation cue is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CueTarget {
    /// The animal or plant the minigame is about.
    Subject,
    /// The companion character reacting to the player.
    Companion,
}

/// Presentation request for the host. The engine never renders anything itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Cue {
    PlayMusic { clip: String },
    Animate { target: CueTarget, state: String },
    /// Raise or lower one of the growth stages.
    SetStage { stage: usize, raised: bool },
    SpawnVfx { name: String },
}

/// What the player earns when the playlist completes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Reward {
    #[default]
    None,
    ArchiveProgress { amount: u32 },
    Harvest { item: String, quantity: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RhythmEvent {
    Started {
        minigame: String,
        pattern_count: usize,
    },
    PatternStarted {
        pattern_index: usize,
        pattern_id: String,
        bpm: u32,
        beat_interval: f64,
    },
    Beat {
        time: f64,
        pattern_index: usize,
    },
    StepJudged {
        pattern_index: usize,
        step_index: usize,
        step_type: StepType,
        judgement: Judgement,
        trust: f32,
    },
    Cue(Cue),
    PlaylistComplete {
        trust: f32,
        reward: Reward,
    },
    Stopped,
}
