//! Layout resolver: line number to slot geometry.
//!
//! Lines are numbered 0..14 across the spread. Lines 0..7 sit on the left
//! page, 7..14 on the right page, and `line % 7` is the row on that page.
//! All coordinates are percentages of the overlay box.

use serde::{Deserialize, Serialize};

use crate::consts::{
    LEFT_PAGE_X_PCT, LINE_HEIGHT_PCT, LINES_PER_PAGE, PAGE_WIDTH_PCT, RIGHT_PAGE_X_PCT, SLOT_COUNT,
    WRITABLE_TOP_PCT,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("line {0} is outside the notebook (0..14)")]
    OutOfRange(usize),
}

/// Which half of the spread a slot lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Left,
    Right,
}

impl Page {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Global line number in `0..14`. Construction validates the range, so every
/// `LineNumber` indexes a real slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct LineNumber(u8);

impl LineNumber {
    /// First line of the left page.
    pub const FIRST: Self = Self(0);

    /// Validate a raw line index.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::OutOfRange`] for indexes of 14 and above.
    pub fn new(index: usize) -> Result<Self, LayoutError> {
        if index >= SLOT_COUNT {
            return Err(LayoutError::OutOfRange(index));
        }
        u8::try_from(index)
            .map(Self)
            .map_err(|_| LayoutError::OutOfRange(index))
    }

    /// Build from a page and a row on that page.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::OutOfRange`] if `row` is not below 7.
    pub fn from_page_row(page: Page, row: u8) -> Result<Self, LayoutError> {
        if row >= LINES_PER_PAGE {
            return Err(LayoutError::OutOfRange(usize::from(row)));
        }
        match page {
            Page::Left => Ok(Self(row)),
            Page::Right => Ok(Self(row + LINES_PER_PAGE)),
        }
    }

    /// Every line in writing order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..LINES_PER_PAGE * 2).map(Self)
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn page(self) -> Page {
        if self.0 < LINES_PER_PAGE { Page::Left } else { Page::Right }
    }

    /// Row on the owning page, `0..7`.
    #[must_use]
    pub fn row(self) -> u8 {
        self.0 % LINES_PER_PAGE
    }
}

impl TryFrom<usize> for LineNumber {
    type Error = LayoutError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineNumber> for usize {
    fn from(line: LineNumber) -> Self {
        line.index()
    }
}

impl std::fmt::Display for LineNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Writable region of one slot, in overlay percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotRect {
    pub page: Page,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SlotRect {
    /// Vertical centre of the line; the pen writes along it.
    #[must_use]
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Pen anchor at the start of the line.
    #[must_use]
    pub fn pen_start(&self) -> (f64, f64) {
        (self.x, self.mid_y())
    }

    /// Pen anchor after `text_width` percent of written text.
    #[must_use]
    pub fn pen_end(&self, text_width: f64) -> (f64, f64) {
        (self.x + text_width, self.mid_y())
    }
}

/// Geometry of the slot at `line`.
#[must_use]
pub fn resolve(line: LineNumber) -> SlotRect {
    let page = line.page();
    let x = match page {
        Page::Left => LEFT_PAGE_X_PCT,
        Page::Right => RIGHT_PAGE_X_PCT,
    };
    SlotRect {
        page,
        x,
        y: WRITABLE_TOP_PCT + f64::from(line.row()) * LINE_HEIGHT_PCT,
        width: PAGE_WIDTH_PCT,
        height: LINE_HEIGHT_PCT,
    }
}

/// Geometry of a raw line index.
///
/// # Errors
///
/// Returns [`LayoutError::OutOfRange`] for indexes outside the notebook.
pub fn resolve_index(index: usize) -> Result<SlotRect, LayoutError> {
    LineNumber::new(index).map(resolve)
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
