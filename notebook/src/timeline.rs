//! Step timing and the actions a session emits to the rendering layer.
//!
//! DESIGN
//! ======
//! A session is planned up front as a list of [`Step`]s, each due a fixed
//! delay after the previous one. Most steps carry an [`Action`] for the
//! surface; two are control points the scheduler acts on itself (commit the
//! written text, finish the session). Planning ahead keeps the scheduler
//! clock-driven: it only needs to know when the next step is due.

use std::time::Duration;

use serde::Serialize;

use crate::consts::{
    CHAR_MS, CUT_APPROACH_MS, CUT_STROKE_MS, HAND_SWAP_MS, REST_RETURN_MS, REST_SWAP_MS, SETTLE_MS, TRAVEL_MS,
    WRITE_PAUSE_MS,
};
use crate::hand::{Ease, HandPose, HandStyle};
use crate::layout::LineNumber;

// =============================================================================
// TIMING
// =============================================================================

/// Every duration used by the write and strike plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub settle: Duration,
    pub travel: Duration,
    pub hand_swap: Duration,
    pub per_char: Duration,
    pub write_pause: Duration,
    pub cut_approach: Duration,
    pub cut_stroke: Duration,
    pub rest_swap: Duration,
    pub rest_return: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(SETTLE_MS),
            travel: Duration::from_millis(TRAVEL_MS),
            hand_swap: Duration::from_millis(HAND_SWAP_MS),
            per_char: Duration::from_millis(CHAR_MS),
            write_pause: Duration::from_millis(WRITE_PAUSE_MS),
            cut_approach: Duration::from_millis(CUT_APPROACH_MS),
            cut_stroke: Duration::from_millis(CUT_STROKE_MS),
            rest_swap: Duration::from_millis(REST_SWAP_MS),
            rest_return: Duration::from_millis(REST_RETURN_MS),
        }
    }
}

impl Timing {
    /// Load durations from `NOTEBOOK_*_MS` variables, falling back to the
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            settle: env_ms("NOTEBOOK_SETTLE_MS", SETTLE_MS),
            travel: env_ms("NOTEBOOK_TRAVEL_MS", TRAVEL_MS),
            hand_swap: env_ms("NOTEBOOK_HAND_SWAP_MS", HAND_SWAP_MS),
            per_char: env_ms("NOTEBOOK_CHAR_MS", CHAR_MS),
            write_pause: env_ms("NOTEBOOK_WRITE_PAUSE_MS", WRITE_PAUSE_MS),
            cut_approach: env_ms("NOTEBOOK_CUT_APPROACH_MS", CUT_APPROACH_MS),
            cut_stroke: env_ms("NOTEBOOK_CUT_STROKE_MS", CUT_STROKE_MS),
            rest_swap: env_ms("NOTEBOOK_REST_SWAP_MS", REST_SWAP_MS),
            rest_return: env_ms("NOTEBOOK_REST_RETURN_MS", REST_RETURN_MS),
        }
    }

    /// All durations zero. Sessions complete within a single `advance`.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            settle: Duration::ZERO,
            travel: Duration::ZERO,
            hand_swap: Duration::ZERO,
            per_char: Duration::ZERO,
            write_pause: Duration::ZERO,
            cut_approach: Duration::ZERO,
            cut_stroke: Duration::ZERO,
            rest_swap: Duration::ZERO,
            rest_return: Duration::ZERO,
        }
    }
}

/// Parse `key` from the environment, falling back to `default` when unset
/// or unparsable.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn env_ms(key: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_parse(key, default_ms))
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Render-layer event emitted while a session plays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// A session claimed `line`. The surface must be able to locate the
    /// line's text region; failing here aborts the session.
    SessionStarted { line: LineNumber, name: String },
    /// Move the pen to `to` over `duration_ms`.
    HandMoved { to: HandPose, duration_ms: u64, ease: Ease },
    /// Cross-fade to `style` over `duration_ms`.
    HandSwapped { style: HandStyle, duration_ms: u64 },
    /// Show `text` (the revealed prefix) on `line`.
    TextRevealed { line: LineNumber, text: String },
    /// `text` is now the committed content of `line`.
    SlotCommitted { line: LineNumber, text: String },
    /// Grow a strike mark on `line` from `from_x` to `to_x` over `duration_ms`.
    StrikeStarted { line: LineNumber, from_x: f64, to_x: f64, duration_ms: u64 },
    /// The strike mark on `line` is fully drawn.
    StrikeCompleted { line: LineNumber },
    /// Every slot's text and strike mark was wiped.
    PageCleared,
    /// The session on `line` ended and the hand is at rest.
    SessionEnded { line: LineNumber },
    /// The session on `line` ended early; nothing more will be drawn for it.
    SessionAborted { line: LineNumber, reason: String },
}

// =============================================================================
// STEPS
// =============================================================================

/// What happens when a step comes due.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// Forward to the surface.
    Emit(Action),
    /// Writing finished: commit the name to its slot and plan the strike.
    Commit,
    /// Strike finished and the hand is home: end the session.
    Finish,
}

/// One step of a session plan, due `delay` after the previous step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub delay: Duration,
    pub kind: StepKind,
}

impl Step {
    #[must_use]
    pub fn emit(delay: Duration, action: Action) -> Self {
        Self { delay, kind: StepKind::Emit(action) }
    }

    /// Emit immediately after the previous step.
    #[must_use]
    pub fn now(action: Action) -> Self {
        Self::emit(Duration::ZERO, action)
    }

    #[must_use]
    pub fn control(delay: Duration, kind: StepKind) -> Self {
        Self { delay, kind }
    }
}

/// Clamp a duration to whole milliseconds for the wire.
#[must_use]
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Total time a plan takes from its first step to its last.
#[must_use]
pub fn plan_duration(steps: &[Step]) -> Duration {
    steps.iter().map(|step| step.delay).sum()
}

#[cfg(test)]
#[path = "timeline_test.rs"]
mod tests;
