use serde::{Deserialize, Serialize};

/// How the offset of a tap is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JudgeMode {
    /// Offset is the time elapsed since the last beat. Early taps before the
    /// next beat count as late taps of the previous one.
    #[default]
    SinceLastBeat,
    /// Offset is the distance to whichever beat is closer, the last one or
    /// the upcoming one.
    NearestBeat,
}

/// Timing direction for EARLY/LATE feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimingDirection {
    Early,
    Exact,
    Late,
}

impl TimingDirection {
    const EXACT_THRESHOLD_SECS: f64 = 0.001;

    /// `signed_offset` is negative before the beat and positive after it.
    pub fn from_offset(signed_offset: f64) -> Self {
        if signed_offset < -Self::EXACT_THRESHOLD_SECS {
            TimingDirection::Early
        } else if signed_offset > Self::EXACT_THRESHOLD_SECS {
            TimingDirection::Late
        } else {
            TimingDirection::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Good,
    Miss,
}

impl Verdict {
    pub fn is_good(self) -> bool {
        self == Verdict::Good
    }
}

/// Result of judging one tap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Judgement {
    pub verdict: Verdict,
    /// Absolute distance to the reference beat, in seconds.
    pub offset: f64,
    pub direction: TimingDirection,
}

/// Classifies a tap against a hit window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitJudge {
    hit_window: f64,
    mode: JudgeMode,
}

impl HitJudge {
    pub fn new(hit_window_seconds: f32, mode: JudgeMode) -> Self {
        Self {
            hit_window: f64::from(hit_window_seconds),
            mode,
        }
    }

    /// Judge a tap made `elapsed` seconds after the last beat.
    ///
    /// The window is inclusive: an offset equal to the hit window is good.
    pub fn judge(&self, elapsed: f64, beat_interval: f64) -> Judgement {
        let signed = match self.mode {
            JudgeMode::SinceLastBeat => elapsed,
            JudgeMode::NearestBeat => {
                let until_next = beat_interval - elapsed;
                if until_next.abs() < elapsed.abs() {
                    -until_next
                } else {
                    elapsed
                }
            }
        };
        let offset = signed.abs();
        let verdict = if offset <= self.hit_window {
            Verdict::Good
        } else {
            Verdict::Miss
        };
        Judgement {
            verdict,
            offset,
            direction: TimingDirection::from_offset(signed),
        }
    }
}
