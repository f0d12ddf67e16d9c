//! Scripted input for the simulator.

use std::collections::VecDeque;

use anyhow::{Context, Result, bail};
use ivy_rhythm::RhythmEvent;
use rand::Rng;

/// Decides on which frames the action input is pressed.
#[derive(Debug, Clone)]
pub enum TapScript {
    /// Press at fixed times (seconds from session start), in ascending order.
    Times { times: Vec<f64>, next: usize },
    /// Press a delay after every beat. The delay is `offset` plus a uniform
    /// jitter in `[-jitter, jitter]`, never below zero. Presses not yet due
    /// are queued in beat order.
    Autoplay {
        offset: f64,
        jitter: f64,
        pending: VecDeque<f64>,
    },
}

impl TapScript {
    pub fn times(mut times: Vec<f64>) -> Self {
        times.sort_by(f64::total_cmp);
        TapScript::Times { times, next: 0 }
    }

    pub fn autoplay(offset: f64, jitter: f64) -> Result<Self> {
        if !offset.is_finite() {
            bail!("autoplay offset must be a finite number, got {offset}");
        }
        if !jitter.is_finite() {
            bail!("autoplay jitter must be a finite number, got {jitter}");
        }
        Ok(TapScript::Autoplay {
            offset,
            jitter: jitter.abs(),
            pending: VecDeque::new(),
        })
    }

    /// Parse a comma-separated list of tap times, e.g. `"1.0, 2.0,2.5"`.
    pub fn parse_times(list: &str) -> Result<Self> {
        let mut times = Vec::new();
        for part in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let t: f64 = part
                .parse()
                .with_context(|| format!("invalid tap time '{part}'"))?;
            if !t.is_finite() || t < 0.0 {
                bail!("tap time must be a non-negative number, got {part}");
            }
            times.push(t);
        }
        Ok(Self::times(times))
    }

    /// Feed the events of the current frame's beat check.
    pub fn observe<R: Rng + ?Sized>(&mut self, events: &[RhythmEvent], rng: &mut R) {
        if let TapScript::Autoplay {
            offset,
            jitter,
            pending,
        } = self
        {
            for event in events {
                if let RhythmEvent::Beat { time, .. } = event {
                    let spread = if *jitter > 0.0 {
                        rng.gen_range(-*jitter..=*jitter)
                    } else {
                        0.0
                    };
                    pending.push_back(time + (*offset + spread).max(0.0));
                }
            }
        }
    }

    /// Whether the input is pressed on the frame at `now`. Several scripted
    /// presses falling in one frame count as a single press.
    pub fn wants_tap(&mut self, now: f64) -> bool {
        match self {
            TapScript::Times { times, next } => {
                let mut pressed = false;
                while *next < times.len() && times[*next] <= now {
                    *next += 1;
                    pressed = true;
                }
                pressed
            }
            TapScript::Autoplay { pending, .. } => {
                let mut pressed = false;
                while pending.front().is_some_and(|&at| at <= now) {
                    pending.pop_front();
                    pressed = true;
                }
                pressed
            }
        }
    }
}
