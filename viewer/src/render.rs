//! Terminal and JSON-lines renderings of the notebook.
//!
//! The terminal surface keeps its own mirror of the fourteen lines, built
//! only from the actions it receives, and prints the two-page spread each
//! time a strike lands or the pages are cleared. The JSON surface writes
//! every action as one line for other tools to consume.

use std::io::Write;

use notebook::consts::{LINES_PER_PAGE, SLOT_COUNT};
use notebook::layout::LineNumber;
use notebook::slots::Notebook;
use notebook::surface::{Surface, SurfaceError};
use notebook::timeline::Action;

const COLUMN_WIDTH: usize = 30;
const STRIKE_OVERLAY: char = '\u{0336}';

// =============================================================================
// SPREAD
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineView {
    pub text: String,
    pub struck: bool,
    committed: bool,
}

impl LineView {
    fn cell(&self) -> String {
        let shown: String = self.text.chars().take(COLUMN_WIDTH).collect();
        let pad = COLUMN_WIDTH - shown.chars().count();
        let body: String =
            if self.struck { shown.chars().flat_map(|c| [c, STRIKE_OVERLAY]).collect() } else { shown };
        format!("{body}{}", " ".repeat(pad))
    }
}

/// Render both pages side by side, left page first.
#[must_use]
pub fn render_spread(lines: &[LineView]) -> String {
    let rule = format!("+{0}+{0}+", "-".repeat(COLUMN_WIDTH + 4));
    let rows = usize::from(LINES_PER_PAGE);
    let blank = LineView::default();
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for row in 0..rows {
        let left = lines.get(row).unwrap_or(&blank);
        let right = lines.get(row + rows).unwrap_or(&blank);
        out.push_str(&format!("| {} {} | {} {} |\n", row + 1, left.cell(), row + 1, right.cell()));
    }
    out.push_str(&rule);
    out
}

/// Line views for the committed contents of `notebook`.
#[must_use]
pub fn notebook_lines(notebook: &Notebook) -> Vec<LineView> {
    notebook
        .iter()
        .map(|(_, slot)| LineView { text: slot.text.clone(), struck: slot.struck, committed: !slot.is_vacant() })
        .collect()
}

fn io_failed(err: &std::io::Error) -> SurfaceError {
    SurfaceError::Failed(err.to_string())
}

// =============================================================================
// TERMINAL
// =============================================================================

pub struct TerminalSurface<W> {
    out: W,
    lines: Vec<LineView>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: vec![LineView::default(); SLOT_COUNT] }
    }

    #[must_use]
    pub fn lines(&self) -> &[LineView] {
        &self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line_mut(&mut self, line: LineNumber) -> &mut LineView {
        &mut self.lines[line.index()]
    }

    fn print_spread(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", render_spread(&self.lines))?;
        self.out.flush()
    }

    fn render(&mut self, action: &Action) -> std::io::Result<()> {
        match action {
            Action::SessionStarted { line, name } => {
                writeln!(self.out, "writing {name:?} on the {} page, line {}", line.page().as_str(), line.row() + 1)?;
            }
            Action::TextRevealed { line, text } => text.clone_into(&mut self.line_mut(*line).text),
            Action::SlotCommitted { line, text } => {
                let view = self.line_mut(*line);
                text.clone_into(&mut view.text);
                view.committed = true;
            }
            Action::StrikeCompleted { line } => {
                self.line_mut(*line).struck = true;
                self.print_spread()?;
            }
            Action::PageCleared => {
                self.lines.fill(LineView::default());
                writeln!(self.out, "both pages full, clearing")?;
            }
            Action::SessionAborted { line, reason } => {
                let view = self.line_mut(*line);
                if !view.committed {
                    *view = LineView::default();
                }
                writeln!(self.out, "line {} abandoned: {reason}", line.index())?;
            }
            Action::HandMoved { .. }
            | Action::HandSwapped { .. }
            | Action::StrikeStarted { .. }
            | Action::SessionEnded { .. } => {}
        }
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn apply(&mut self, action: &Action) -> Result<(), SurfaceError> {
        self.render(action).map_err(|e| io_failed(&e))
    }
}

// =============================================================================
// JSON LINES
// =============================================================================

pub struct JsonSurface<W> {
    out: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for JsonSurface<W> {
    fn apply(&mut self, action: &Action) -> Result<(), SurfaceError> {
        serde_json::to_writer(&mut self.out, action).map_err(|e| SurfaceError::Failed(e.to_string()))?;
        writeln!(self.out).map_err(|e| io_failed(&e))?;
        self.out.flush().map_err(|e| io_failed(&e))
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// The surface selected on the command line.
pub enum Output<W> {
    Terminal(TerminalSurface<W>),
    Json(JsonSurface<W>),
}

impl<W: Write> Output<W> {
    pub fn new(out: W, json: bool) -> Self {
        if json { Self::Json(JsonSurface::new(out)) } else { Self::Terminal(TerminalSurface::new(out)) }
    }

    /// Print the final state of `notebook` (terminal output only).
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn summary(&mut self, notebook: &Notebook) -> std::io::Result<()> {
        match self {
            Self::Terminal(surface) => {
                writeln!(surface.out, "final notebook ({} of {SLOT_COUNT} lines used)", notebook.occupied_count())?;
                writeln!(surface.out, "{}", render_spread(&notebook_lines(notebook)))?;
                surface.out.flush()
            }
            Self::Json(_) => Ok(()),
        }
    }
}

impl<W: Write> Surface for Output<W> {
    fn apply(&mut self, action: &Action) -> Result<(), SurfaceError> {
        match self {
            Self::Terminal(surface) => surface.apply(action),
            Self::Json(surface) => surface.apply(action),
        }
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
