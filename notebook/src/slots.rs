//! Slot arena: the fourteen writable lines and what they hold.
//!
//! Occupancy lives here, indexed by [`LineNumber`], so the scheduler never
//! has to inspect rendered output to find a free line.

use serde::Serialize;

use crate::consts::SLOT_COUNT;
use crate::layout::LineNumber;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("line {line} already holds {text:?}")]
    Occupied { line: LineNumber, text: String },
    #[error("cannot write an empty name")]
    EmptyText,
}

/// One writable line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Committed text; empty means vacant.
    pub text: String,
    /// Whether the strike-through flourish has been drawn over the text.
    pub struck: bool,
}

impl Slot {
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Both pages of the notebook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notebook {
    slots: [Slot; SLOT_COUNT],
}

impl Notebook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slot(&self, line: LineNumber) -> &Slot {
        &self.slots[line.index()]
    }

    /// Committed text at `line`, empty when vacant.
    #[must_use]
    pub fn text(&self, line: LineNumber) -> &str {
        &self.slot(line).text
    }

    #[must_use]
    pub fn is_occupied(&self, line: LineNumber) -> bool {
        !self.slot(line).is_vacant()
    }

    /// Lowest-numbered vacant line, scanning 0 upward.
    #[must_use]
    pub fn first_vacant(&self) -> Option<LineNumber> {
        LineNumber::all().find(|line| !self.is_occupied(*line))
    }

    /// Every line holds text.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_vacant().is_none()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_vacant()).count()
    }

    /// Commit `text` to a vacant line.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Occupied`] if the line already holds text and
    /// [`SlotError::EmptyText`] if `text` is blank. The slot is unchanged on
    /// error.
    pub fn write(&mut self, line: LineNumber, text: &str) -> Result<(), SlotError> {
        if text.trim().is_empty() {
            return Err(SlotError::EmptyText);
        }
        let slot = &mut self.slots[line.index()];
        if !slot.is_vacant() {
            return Err(SlotError::Occupied { line, text: slot.text.clone() });
        }
        slot.text = text.to_owned();
        slot.struck = false;
        Ok(())
    }

    /// Mark the text at `line` as struck through. Vacant lines stay unmarked.
    pub fn strike(&mut self, line: LineNumber) {
        let slot = &mut self.slots[line.index()];
        if !slot.is_vacant() {
            slot.struck = true;
        }
    }

    /// Wipe every line and every strike mark.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::default();
        }
    }

    /// Lines with their slots, in writing order.
    pub fn iter(&self) -> impl Iterator<Item = (LineNumber, &Slot)> {
        LineNumber::all().zip(self.slots.iter())
    }
}

#[cfg(test)]
#[path = "slots_test.rs"]
mod tests;
