//! Shared numeric constants for the notebook crate.
//!
//! Layout values are percentages of the overlay box. They are a contract with
//! the rendering layer: changing them moves every line on screen.

// ── Notebook shape ──────────────────────────────────────────────

/// Writable lines on each page.
pub const LINES_PER_PAGE: u8 = 7;

/// Writable lines across both pages.
pub const SLOT_COUNT: usize = 14;

// ── Writable area (percent of overlay) ──────────────────────────

/// Top edge of the first line.
pub const WRITABLE_TOP_PCT: f64 = 20.0;

/// Height of the whole writable band.
pub const WRITABLE_HEIGHT_PCT: f64 = 60.0;

/// Height of one line.
pub const LINE_HEIGHT_PCT: f64 = 8.0;

/// Left edge of the left page's writable area.
pub const LEFT_PAGE_X_PCT: f64 = 10.0;

/// Left edge of the right page's writable area.
pub const RIGHT_PAGE_X_PCT: f64 = 60.0;

/// Width of either page's writable area.
pub const PAGE_WIDTH_PCT: f64 = 30.0;

// ── Pen ─────────────────────────────────────────────────────────

/// Gap between the end of the written text and the pen tip, in pixels.
pub const PEN_GAP_PX: f64 = 8.0;

/// Maximum pen wobble while writing, in degrees either way.
pub const PEN_JITTER_DEG: f64 = 1.0;

/// Pen tilt while approaching the end of a line to strike it.
pub const CUT_APPROACH_ROTATION_DEG: f64 = 10.0;

/// Pen tilt at the end of the strike stroke.
pub const CUT_STROKE_ROTATION_DEG: f64 = -5.0;

/// Resting pen position (right 75%, bottom 70% of the overlay).
pub const REST_X_PCT: f64 = 25.0;
pub const REST_Y_PCT: f64 = 30.0;

// ── Handwriting font ────────────────────────────────────────────

/// Font size as a fraction of the viewport height (`4vh`).
pub const FONT_SIZE_VH: f64 = 0.04;

/// Extra spacing after every glyph, in pixels.
pub const LETTER_SPACING_PX: f64 = 0.5;

/// Viewport assumed when the host does not report one.
pub const DEFAULT_VIEWPORT_WIDTH_PX: f64 = 1920.0;
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f64 = 1080.0;

// ── Default step durations (milliseconds) ───────────────────────

/// Delay between picking a slot and starting to animate it.
pub const SETTLE_MS: u64 = 100;

/// Pen travel from wherever it is to the start of the target line.
pub const TRAVEL_MS: u64 = 800;

/// Cross-fade from the resting hand to the writing hand.
pub const HAND_SWAP_MS: u64 = 300;

/// Time to reveal one character.
pub const CHAR_MS: u64 = 200;

/// Pause after the last character before the strike flourish.
pub const WRITE_PAUSE_MS: u64 = 500;

/// Pen travel to the end of the written text before striking.
pub const CUT_APPROACH_MS: u64 = 600;

/// Duration of the strike stroke itself.
pub const CUT_STROKE_MS: u64 = 1500;

/// Cross-fade back to the resting hand.
pub const REST_SWAP_MS: u64 = 200;

/// Pen travel back to the resting position.
pub const REST_RETURN_MS: u64 = 1000;
