//! Line queue and scheduler: the single-flight session state machine.
//!
//! DESIGN
//! ======
//! `SchedulerState` owns everything that changes while the notebook runs:
//! the FIFO of pending names, the slot arena, the active session (if any),
//! and where the pen is. `Scheduler` wraps it with timing, font metrics and
//! an RNG, plus the queue of planned steps for the active session.
//!
//! The scheduler is clock-driven and never sleeps. The host calls
//! [`Scheduler::advance`] with the current instant; every step that has come
//! due runs, and whenever no session is active and names are waiting, the
//! next name is popped and placed on the first vacant line (scanning 0..14).
//! When no line is vacant, every slot is cleared and the name goes back to
//! the head of the queue, so the following check writes it on line 0.
//!
//! INVARIANTS
//! ==========
//! - At most one session exists; starting another while one is active fails
//!   with [`SchedulerError::Busy`].
//! - Committed slot text is only ever removed by the page-full clear.
//! - Names are written in arrival order. A name is lost only when its
//!   session aborts (the surface could not locate the slot).

use std::collections::VecDeque;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::hand::{HandPose, HandStyle};
use crate::layout::LineNumber;
use crate::measure::{FontMetrics, Viewport};
use crate::names::split_names;
use crate::slots::Notebook;
use crate::strike::plan_strike;
use crate::surface::Surface;
use crate::timeline::{Action, Step, StepKind, Timing, env_parse, millis, plan_duration};
use crate::writer::plan_writing;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    #[error("a session is already writing on line {0}")]
    Busy(LineNumber),
}

/// Result of invoking the writing animator on a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A session now owns the slot.
    Started,
    /// The slot already held text (or the name was blank); nothing was
    /// animated and the scheduler stays idle.
    Skipped,
}

/// Where the active session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Typing,
    Cutting,
}

/// The one in-flight write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub line: LineNumber,
    pub name: String,
    pub phase: Phase,
    /// Characters revealed so far.
    pub revealed: usize,
}

/// Everything the animation loop mutates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchedulerState {
    pub queue: VecDeque<String>,
    pub notebook: Notebook,
    pub session: Option<Session>,
    pub hand: HandPose,
    pub hand_style: HandStyle,
}

impl SchedulerState {
    /// True iff a session is active.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.session.is_some()
    }
}

/// Lifetime counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchedulerStats {
    pub started: u64,
    pub completed: u64,
    pub aborted: u64,
    pub skipped: u64,
    pub clears: u64,
}

/// Timing and viewport for a scheduler.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SchedulerConfig {
    pub timing: Timing,
    pub viewport: Viewport,
}

impl SchedulerConfig {
    /// Read `NOTEBOOK_*_MS` timings and `NOTEBOOK_VIEWPORT_WIDTH` /
    /// `NOTEBOOK_VIEWPORT_HEIGHT` (pixels).
    #[must_use]
    pub fn from_env() -> Self {
        let fallback = Viewport::default();
        Self {
            timing: Timing::from_env(),
            viewport: Viewport {
                width_px: env_parse("NOTEBOOK_VIEWPORT_WIDTH", fallback.width_px),
                height_px: env_parse("NOTEBOOK_VIEWPORT_HEIGHT", fallback.height_px),
            },
        }
    }
}

// =============================================================================
// SCHEDULER
// =============================================================================

pub struct Scheduler {
    state: SchedulerState,
    config: SchedulerConfig,
    metrics: FontMetrics,
    rng: StdRng,
    /// Planned steps of the active session with their due instants.
    pending: VecDeque<(Instant, StepKind)>,
    stats: SchedulerStats,
}

impl Scheduler {
    #[must_use]
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic pen jitter, for tests and replays.
    #[must_use]
    pub fn with_seed(config: SchedulerConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SchedulerConfig, rng: StdRng) -> Self {
        Self {
            state: SchedulerState::default(),
            metrics: FontMetrics::for_viewport(config.viewport),
            config,
            rng,
            pending: VecDeque::new(),
            stats: SchedulerStats::default(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    #[must_use]
    pub fn notebook(&self) -> &Notebook {
        &self.state.notebook
    }

    #[must_use]
    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.state.queue.len()
    }

    /// A session is active or names are waiting.
    #[must_use]
    pub fn has_work(&self) -> bool {
        self.is_busy() || !self.state.queue.is_empty()
    }

    /// When the next planned step is due, if a session is active.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.front().map(|(due, _)| *due)
    }

    // --- Inputs ---

    /// Append the names in `payload` to the queue. Returns how many were
    /// added. Never touches the active session.
    pub fn enqueue(&mut self, payload: &str) -> usize {
        let names = split_names(payload);
        let added = names.len();
        self.state.queue.extend(names);
        debug!(added, queued = self.state.queue.len(), "notebook: names queued");
        added
    }

    /// Run every step due at `now`, then start the next session if idle.
    pub fn advance(&mut self, now: Instant, surface: &mut dyn Surface) {
        loop {
            while let Some(due) = self.next_deadline()
                && due <= now
            {
                let Some((due, kind)) = self.pending.pop_front() else {
                    break;
                };
                self.run_step(due, kind, surface);
            }

            if self.is_busy() || self.state.queue.is_empty() {
                break;
            }
            self.schedule_next(now, surface);
        }
    }

    /// Invoke the writing animator for `name` on `line`.
    ///
    /// A slot that already holds text is left untouched and the call is a
    /// no-op returning [`WriteOutcome::Skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Busy`] if a session is already active.
    pub fn write_into(
        &mut self,
        line: LineNumber,
        name: String,
        now: Instant,
    ) -> Result<WriteOutcome, SchedulerError> {
        if let Some(active) = &self.state.session {
            return Err(SchedulerError::Busy(active.line));
        }
        if self.state.notebook.is_occupied(line) || name.trim().is_empty() {
            info!(%line, %name, "notebook: line already written, skipping");
            self.stats.skipped += 1;
            return Ok(WriteOutcome::Skipped);
        }

        let steps = plan_writing(
            line,
            &name,
            &self.metrics,
            self.config.viewport,
            &self.config.timing,
            &mut self.rng,
        );
        info!(%line, %name, duration_ms = millis(plan_duration(&steps)), "notebook: session started");
        self.state.session = Some(Session { line, name, phase: Phase::Typing, revealed: 0 });
        self.stats.started += 1;
        self.push_plan(now, steps);
        Ok(WriteOutcome::Started)
    }

    /// End the active session without writing anything further. The name is
    /// dropped; the scheduler returns to idle.
    pub fn abort_session(&mut self, reason: &str, surface: &mut dyn Surface) {
        let Some(session) = self.state.session.take() else {
            return;
        };
        self.pending.clear();
        self.stats.aborted += 1;
        warn!(line = %session.line, name = %session.name, reason, "notebook: session aborted, name dropped");
        let action = Action::SessionAborted { line: session.line, reason: reason.to_owned() };
        if let Err(e) = surface.apply(&action) {
            warn!(error = %e, "notebook: surface rejected abort notice");
        }
    }

    // --- Internals ---

    fn schedule_next(&mut self, now: Instant, surface: &mut dyn Surface) {
        let Some(name) = self.state.queue.pop_front() else {
            return;
        };

        let Some(line) = self.state.notebook.first_vacant() else {
            info!(queued = self.state.queue.len() + 1, "notebook: all lines written, clearing both pages");
            self.state.notebook.clear();
            self.stats.clears += 1;
            if let Err(e) = surface.apply(&Action::PageCleared) {
                warn!(error = %e, "notebook: surface failed to clear");
            }
            self.state.queue.push_front(name);
            return;
        };

        if let Err(e) = self.write_into(line, name, now) {
            // Only reachable if the idle check above is wrong.
            warn!(error = %e, "notebook: scheduling check raced an active session");
        }
    }

    fn push_plan(&mut self, base: Instant, steps: Vec<Step>) {
        let mut due = base;
        for step in steps {
            due += step.delay;
            self.pending.push_back((due, step.kind));
        }
    }

    fn run_step(&mut self, due: Instant, kind: StepKind, surface: &mut dyn Surface) {
        match kind {
            StepKind::Emit(action) => self.emit(&action, surface),
            StepKind::Commit => self.commit(due, surface),
            StepKind::Finish => self.finish(surface),
        }
    }

    /// Forward a session action; a surface failure aborts the session.
    fn emit(&mut self, action: &Action, surface: &mut dyn Surface) {
        if let Err(e) = surface.apply(action) {
            self.abort_session(&e.to_string(), surface);
            return;
        }
        match action {
            Action::HandMoved { to, .. } => self.state.hand = *to,
            Action::HandSwapped { style, .. } => self.state.hand_style = *style,
            Action::TextRevealed { text, .. } => {
                if let Some(session) = self.state.session.as_mut() {
                    session.revealed = text.chars().count();
                }
            }
            Action::StrikeCompleted { line } => self.state.notebook.strike(*line),
            _ => {}
        }
    }

    fn commit(&mut self, due: Instant, surface: &mut dyn Surface) {
        let Some(session) = self.state.session.as_ref() else {
            return;
        };
        let (line, name) = (session.line, session.name.clone());

        if let Err(e) = self.state.notebook.write(line, &name) {
            self.abort_session(&e.to_string(), surface);
            return;
        }
        self.emit(&Action::SlotCommitted { line, text: name.clone() }, surface);

        let Some(session) = self.state.session.as_mut() else {
            return;
        };
        session.phase = Phase::Cutting;
        let steps = plan_strike(line, &name, &self.metrics, self.config.viewport, &self.config.timing);
        self.push_plan(due, steps);
    }

    fn finish(&mut self, surface: &mut dyn Surface) {
        let Some(session) = self.state.session.take() else {
            return;
        };
        self.stats.completed += 1;
        info!(line = %session.line, name = %session.name, "notebook: session finished");
        if let Err(e) = surface.apply(&Action::SessionEnded { line: session.line }) {
            warn!(error = %e, "notebook: surface rejected session end");
        }
    }
}

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod tests;
