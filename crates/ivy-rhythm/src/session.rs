use ivy_model::RhythmPattern;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::StartError;
use crate::event::{Cue, Reward, RhythmEvent};
use crate::judge::{HitJudge, JudgeMode};
use crate::minigame::{JudgedStep, Minigame};
use crate::playlist::Playlist;
use crate::tally::JudgeTally;
use crate::trust::TrustMeter;

/// End-of-session report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub minigame: String,
    pub completed: bool,
    pub trust: f32,
    pub patterns_completed: usize,
    pub good_count: u32,
    pub miss_count: u32,
    pub best_streak: u32,
    pub accuracy: f64,
    pub reward: Option<Reward>,
}

/// Plays a minigame's playlist: emits beats, judges taps, tracks trust.
///
/// The session is driven from outside. Every call takes the current time in
/// seconds; the host is expected to call [`update`](Self::update) once per
/// frame with whether the action input was pressed on that frame.
pub struct RhythmSession<M> {
    minigame: M,
    judge_mode: JudgeMode,
    rng: StdRng,
    playlist: Playlist,
    judge: HitJudge,
    beat_interval: f64,
    last_beat_time: f64,
    step_index: usize,
    patterns_completed: usize,
    trust: TrustMeter,
    tally: JudgeTally,
    running: bool,
    reward: Option<Reward>,
}

impl<M: Minigame> RhythmSession<M> {
    pub fn new(minigame: M) -> Self {
        Self::with_rng(minigame, StdRng::from_entropy())
    }

    /// Session whose shuffles and random reactions are reproducible.
    pub fn with_seed(minigame: M, seed: u64) -> Self {
        Self::with_rng(minigame, StdRng::seed_from_u64(seed))
    }

    fn with_rng(minigame: M, rng: StdRng) -> Self {
        Self {
            minigame,
            judge_mode: JudgeMode::default(),
            rng,
            playlist: Playlist::default(),
            judge: HitJudge::new(0.0, JudgeMode::default()),
            beat_interval: 0.0,
            last_beat_time: 0.0,
            step_index: 0,
            patterns_completed: 0,
            trust: TrustMeter::new(),
            tally: JudgeTally::new(),
            running: false,
            reward: None,
        }
    }

    pub fn with_judge_mode(mut self, mode: JudgeMode) -> Self {
        self.judge_mode = mode;
        self
    }

    pub fn minigame(&self) -> &M {
        &self.minigame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn trust(&self) -> f32 {
        self.trust.value()
    }

    pub fn tally(&self) -> &JudgeTally {
        &self.tally
    }

    pub fn pattern_index(&self) -> usize {
        self.playlist.index()
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn beat_interval(&self) -> f64 {
        self.beat_interval
    }

    pub fn last_beat_time(&self) -> f64 {
        self.last_beat_time
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_pattern(&self) -> Option<&RhythmPattern> {
        self.playlist.current()
    }

    /// Reward of the last completed playlist, if any.
    pub fn reward(&self) -> Option<&Reward> {
        self.reward.as_ref()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            minigame: self.minigame.name().to_string(),
            completed: self.reward.is_some(),
            trust: self.trust.value(),
            patterns_completed: self.patterns_completed,
            good_count: self.tally.good_count,
            miss_count: self.tally.miss_count,
            best_streak: self.tally.best_streak,
            accuracy: self.tally.accuracy(),
            reward: self.reward.clone(),
        }
    }

    /// Build the playlist and begin the first pattern at `now`.
    ///
    /// On error the session's fields are untouched and it stays stopped (or
    /// running, for [`StartError::AlreadyRunning`]). The minigame's
    /// `on_start` runs before the playlist is built, so its own state may
    /// already be reset when [`StartError::EmptyPlaylist`] is returned.
    pub fn start(&mut self, now: f64) -> Result<Vec<RhythmEvent>, StartError> {
        if self.running {
            warn!("[{}] Already running", self.minigame.name());
            return Err(StartError::AlreadyRunning);
        }

        let mut cues = Vec::new();
        self.minigame.on_start(&mut cues)?;

        let playlist = Playlist::build(
            self.minigame.patterns(),
            self.minigame.playback_mode(),
            &mut self.rng,
        );
        if playlist.is_empty() {
            warn!("[{}] No patterns", self.minigame.name());
            return Err(StartError::EmptyPlaylist {
                minigame: self.minigame.name().to_string(),
            });
        }

        self.playlist = playlist;
        self.patterns_completed = 0;
        self.trust.reset();
        self.tally.reset();
        self.reward = None;
        self.running = true;
        info!(
            "[{}] Started with {} pattern(s)",
            self.minigame.name(),
            self.playlist.len()
        );

        let mut events = vec![RhythmEvent::Started {
            minigame: self.minigame.name().to_string(),
            pattern_count: self.playlist.len(),
        }];
        push_cues(&mut events, cues);
        self.prepare_pattern(now, &mut events);
        Ok(events)
    }

    /// Stop the session. Emits `Stopped` only if it was running.
    pub fn stop(&mut self) -> Vec<RhythmEvent> {
        let mut events = Vec::new();
        self.stop_into(&mut events);
        events
    }

    /// Emit a beat if at least one beat interval passed since the last one.
    pub fn tick(&mut self, now: f64) -> Vec<RhythmEvent> {
        let mut events = Vec::new();
        self.tick_into(now, &mut events);
        events
    }

    /// Judge the action input at `now` against the current step.
    pub fn tap(&mut self, now: f64) -> Vec<RhythmEvent> {
        let mut events = Vec::new();
        self.tap_into(now, &mut events);
        events
    }

    /// One frame: beat check first, then the tap if the input was pressed.
    pub fn update(&mut self, now: f64, tapped: bool) -> Vec<RhythmEvent> {
        let mut events = Vec::new();
        self.tick_into(now, &mut events);
        if tapped {
            self.tap_into(now, &mut events);
        }
        events
    }

    fn prepare_pattern(&mut self, now: f64, events: &mut Vec<RhythmEvent>) {
        let Some(pattern) = self.playlist.current() else {
            return;
        };
        self.beat_interval = pattern.beat_interval();
        self.judge = HitJudge::new(pattern.hit_window_seconds, self.judge_mode);
        self.step_index = 0;
        self.last_beat_time = now;
        debug!(
            "Pattern {} ({}) at {} bpm",
            self.playlist.index(),
            pattern.pattern_id,
            pattern.bpm
        );
        events.push(RhythmEvent::PatternStarted {
            pattern_index: self.playlist.index(),
            pattern_id: pattern.pattern_id.clone(),
            bpm: pattern.bpm,
            beat_interval: self.beat_interval,
        });
    }

    fn tick_into(&mut self, now: f64, events: &mut Vec<RhythmEvent>) {
        if !self.running {
            return;
        }
        if now - self.last_beat_time >= self.beat_interval {
            self.last_beat_time = now;
            events.push(RhythmEvent::Beat {
                time: now,
                pattern_index: self.playlist.index(),
            });
            let mut cues = Vec::new();
            self.minigame.on_beat(&mut cues);
            push_cues(events, cues);
        }
    }

    fn tap_into(&mut self, now: f64, events: &mut Vec<RhythmEvent>) {
        if !self.running {
            return;
        }
        let Some(pattern) = self.playlist.current() else {
            return;
        };
        let pattern_len = pattern.len();
        let Some(step) = pattern.step(self.step_index).copied() else {
            return;
        };

        let elapsed = (now - self.last_beat_time).abs();
        let judgement = self.judge.judge(elapsed, self.beat_interval);
        let judged = JudgedStep {
            step,
            step_index: self.step_index,
            pattern_index: self.playlist.index(),
            verdict: judgement.verdict,
        };

        let mut cues = Vec::new();
        let delta = self
            .minigame
            .on_step_judged(&judged, &mut self.rng, &mut cues);
        self.trust.apply(delta);
        self.tally.record(judgement.verdict);
        debug!(
            "Step {}/{} {:?} offset {:.3}s trust {:.1}",
            judged.step_index + 1,
            pattern_len,
            judgement.verdict,
            judgement.offset,
            self.trust.value()
        );
        events.push(RhythmEvent::StepJudged {
            pattern_index: judged.pattern_index,
            step_index: judged.step_index,
            step_type: step.step_type,
            judgement,
            trust: self.trust.value(),
        });
        push_cues(events, cues);

        self.step_index += 1;
        if self.step_index >= pattern_len {
            self.patterns_completed += 1;
            if self.playlist.advance() {
                self.prepare_pattern(now, events);
            } else {
                self.complete(events);
            }
        }
    }

    fn complete(&mut self, events: &mut Vec<RhythmEvent>) {
        let trust = self.trust.value();
        let reward = self.minigame.on_playlist_complete(trust);
        info!(
            "[{}] Playlist complete, trust {:.1}, reward {:?}",
            self.minigame.name(),
            trust,
            reward
        );
        events.push(RhythmEvent::PlaylistComplete {
            trust,
            reward: reward.clone(),
        });
        self.reward = Some(reward);
        self.stop_into(events);
    }

    fn stop_into(&mut self, events: &mut Vec<RhythmEvent>) {
        if !self.running {
            return;
        }
        self.running = false;
        info!("[{}] Stopped", self.minigame.name());
        events.push(RhythmEvent::Stopped);
    }
}

fn push_cues(events: &mut Vec<RhythmEvent>, cues: Vec<Cue>) {
    events.extend(cues.into_iter().map(RhythmEvent::Cue));
}
