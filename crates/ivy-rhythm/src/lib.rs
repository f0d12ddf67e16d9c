// Rhythm minigame engine: beat timing, hit judging, trust scoring, playlists

mod error;
mod event;
mod judge;
pub mod minigame;
mod playlist;
mod session;
mod tally;
mod trust;

pub use error::StartError;
pub use event::{Cue, CueTarget, Reward, RhythmEvent};
pub use judge::{HitJudge, JudgeMode, Judgement, TimingDirection, Verdict};
pub use minigame::{AnimalMinigame, JudgedStep, Minigame, PlantMinigame};
pub use playlist::Playlist;
pub use session::{RhythmSession, SessionSummary};
pub use tally::JudgeTally;
pub use trust::TrustMeter;
