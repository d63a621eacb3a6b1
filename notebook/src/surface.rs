//! Rendering-layer seam.
//!
//! The scheduler never draws. It hands each [`Action`] to a [`Surface`],
//! which owns whatever the notebook looks like on screen (a terminal dump, a
//! JSON stream, a test recorder).

use crate::layout::LineNumber;
use crate::timeline::Action;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The slot's text region could not be located on screen.
    #[error("text region for line {0} not found")]
    RegionMissing(LineNumber),
    /// The surface failed for another reason (closed output, I/O).
    #[error("surface failed: {0}")]
    Failed(String),
}

/// Something that renders notebook actions.
pub trait Surface {
    /// Render one action.
    ///
    /// # Errors
    ///
    /// Returning an error while a session is active aborts that session.
    fn apply(&mut self, action: &Action) -> Result<(), SurfaceError>;
}

/// Surface that records every action it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub actions: Vec<Action>,
    /// Lines whose region lookup fails when a session starts on them.
    pub missing: Vec<LineNumber>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed `(line, text)` pairs in the order they were written.
    #[must_use]
    pub fn commits(&self) -> Vec<(LineNumber, String)> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                Action::SlotCommitted { line, text } => Some((*line, text.clone())),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn count(&self, pred: impl Fn(&Action) -> bool) -> usize {
        self.actions.iter().filter(|action| pred(action)).count()
    }
}

impl Surface for RecordingSurface {
    fn apply(&mut self, action: &Action) -> Result<(), SurfaceError> {
        if let Action::SessionStarted { line, .. } = action
            && self.missing.contains(line)
        {
            return Err(SurfaceError::RegionMissing(*line));
        }
        self.actions.push(action.clone());
        Ok(())
    }
}
