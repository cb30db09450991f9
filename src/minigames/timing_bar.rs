//! Fight timing bar: stop a sweeping cursor as close to the centre as you can.

use super::frame;
use crate::console::{Console, KeyRead};
use crate::core::constants::{
    CRITICAL_MULTIPLIER, GOOD_MULTIPLIER, MISS_MULTIPLIER, TIMING_BAR_CRIT_ZONE,
    TIMING_BAR_CRIT_ZONE_MAX, TIMING_BAR_CRIT_ZONE_PER_LUCK, TIMING_BAR_FRAME_MS,
    TIMING_BAR_GOOD_ZONE, TIMING_BAR_MAX_SWEEPS, TIMING_BAR_SWEEP_MS, TIMING_BAR_WEAK_ZONE,
    TIMING_BAR_WIDTH, WEAK_MULTIPLIER,
};
use crate::encounter::EncounterContext;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitGrade {
    Critical,
    Good,
    Weak,
    Miss,
}

impl HitGrade {
    pub fn multiplier(&self) -> f64 {
        match self {
            HitGrade::Critical => CRITICAL_MULTIPLIER,
            HitGrade::Good => GOOD_MULTIPLIER,
            HitGrade::Weak => WEAK_MULTIPLIER,
            HitGrade::Miss => MISS_MULTIPLIER,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HitGrade::Critical => "CRITICAL!",
            HitGrade::Good => "Good hit",
            HitGrade::Weak => "Weak hit",
            HitGrade::Miss => "Miss...",
        }
    }
}

/// Cursor position in `[0, 1)` after `elapsed`; each sweep runs left to right.
pub fn cursor_fraction(elapsed: Duration, sweep: Duration) -> f64 {
    let sweep_ms = sweep.as_millis().max(1);
    (elapsed.as_millis() % sweep_ms) as f64 / sweep_ms as f64
}

/// Distance from the centre of the bar, normalised to `[0, 1]`.
pub fn cursor_offset(fraction: f64) -> f64 {
    ((fraction - 0.5).abs() * 2.0).min(1.0)
}

pub fn crit_zone_for_luck(luck: u32) -> f64 {
    (TIMING_BAR_CRIT_ZONE + TIMING_BAR_CRIT_ZONE_PER_LUCK * luck as f64).min(TIMING_BAR_CRIT_ZONE_MAX)
}

pub fn grade(offset: f64, crit_zone: f64) -> HitGrade {
    if offset <= crit_zone {
        HitGrade::Critical
    } else if offset <= TIMING_BAR_GOOD_ZONE {
        HitGrade::Good
    } else if offset <= TIMING_BAR_WEAK_ZONE {
        HitGrade::Weak
    } else {
        HitGrade::Miss
    }
}

fn bar_line(fraction: f64) -> String {
    let cursor = ((fraction * TIMING_BAR_WIDTH as f64) as usize).min(TIMING_BAR_WIDTH - 1);
    let centre = TIMING_BAR_WIDTH / 2;
    let cells: String = (0..TIMING_BAR_WIDTH)
        .map(|i| {
            if i == cursor {
                '\u{2588}'
            } else if i == centre {
                '|'
            } else {
                '-'
            }
        })
        .collect();
    format!("[{}]", cells)
}

/// Run the bar until a key is pressed or every sweep has passed.
/// Any key stops the cursor; running out of sweeps is a miss.
pub fn run_timing_bar<R, C: Console>(ctx: &mut EncounterContext<R, C>) -> HitGrade {
    let sweep = Duration::from_millis(TIMING_BAR_SWEEP_MS);
    let total = sweep * TIMING_BAR_MAX_SWEEPS;
    let tick = Duration::from_millis(TIMING_BAR_FRAME_MS);
    let crit_zone = crit_zone_for_luck(ctx.stats.luck);

    let start = ctx.now();
    loop {
        let elapsed = ctx.since(start);
        if elapsed >= total {
            tracing::debug!("timing bar ran out");
            return HitGrade::Miss;
        }

        ctx.render(&frame(
            "Strike!",
            vec![
                "Stop the cursor on the centre mark!".to_string(),
                String::new(),
                bar_line(cursor_fraction(elapsed, sweep)),
            ],
            "[Any key] Strike",
        ));

        if let KeyRead::Key(_) = ctx.console.read_key(tick.min(total - elapsed)) {
            let offset = cursor_offset(cursor_fraction(ctx.since(start), sweep));
            let hit = grade(offset, crit_zone);
            tracing::debug!(offset, ?hit, "timing bar stopped");
            return hit;
        }
    }
}
