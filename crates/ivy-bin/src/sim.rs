use anyhow::Result;
use ivy_rhythm::{Minigame, RhythmEvent, RhythmSession, SessionSummary};
use log::{debug, info, warn};
use rand::Rng;

use crate::config::SimConfig;
use crate::script::TapScript;

/// Drive `session` with a fixed-rate frame loop until it stops or the
/// configured time limit is reached. Returns every emitted event.
pub fn run<M: Minigame, R: Rng>(
    session: &mut RhythmSession<M>,
    script: &mut TapScript,
    config: &SimConfig,
    rng: &mut R,
) -> Result<Vec<RhythmEvent>> {
    let step = config.frame_step();
    let mut now = 0.0;
    let mut log = session.start(now)?;
    if config.log_events {
        log_events(&log);
    }

    while session.is_running() && now < config.max_duration_secs {
        now += step;

        let mut frame = session.tick(now);
        script.observe(&frame, rng);
        if script.wants_tap(now) {
            frame.extend(session.tap(now));
        }

        if config.log_events {
            log_events(&frame);
        }
        log.extend(frame);
    }

    if session.is_running() {
        warn!(
            "Session still running after {:.1}s, stopping",
            config.max_duration_secs
        );
        log.extend(session.stop());
    }
    Ok(log)
}

fn log_events(events: &[RhythmEvent]) {
    for event in events {
        match event {
            RhythmEvent::Beat { .. } | RhythmEvent::Cue(_) => debug!("{event:?}"),
            _ => info!("{event:?}"),
        }
    }
}

/// Human-readable summary lines.
pub fn format_summary(summary: &SessionSummary) -> String {
    let status = if summary.completed {
        "complete"
    } else {
        "incomplete"
    };
    [
        format!("{} ({status})", summary.minigame),
        format!("  trust:    {:.1}", summary.trust),
        format!("  patterns: {}", summary.patterns_completed),
        format!("  good:     {}", summary.good_count),
        format!("  miss:     {}", summary.miss_count),
        format!("  streak:   {}", summary.best_streak),
        format!("  accuracy: {:.2}%", summary.accuracy),
        format!("  reward:   {:?}", summary.reward),
    ]
    .join("\n")
}
