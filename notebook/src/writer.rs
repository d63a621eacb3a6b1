//! Writing animator: plans the character-by-character reveal of one name.
//!
//! The pen first travels to the start of the line, swaps to the writing
//! hand, then reveals one character per quantum. After every character the
//! revealed prefix is re-measured and the pen moves to just past its end,
//! with a small random tilt so the motion does not look mechanical.

use rand::Rng;

use crate::consts::{PEN_GAP_PX, PEN_JITTER_DEG};
use crate::hand::{Ease, HandPose, HandStyle};
use crate::layout::{LineNumber, resolve};
use crate::measure::{TextMeasure, Viewport};
use crate::timeline::{Action, Step, StepKind, Timing, millis};

/// Plan the write session for `name` on `line`.
///
/// The plan ends with a [`StepKind::Commit`] control step once the last
/// character has had its quantum plus the post-write pause.
pub fn plan_writing(
    line: LineNumber,
    name: &str,
    measure: &dyn TextMeasure,
    viewport: Viewport,
    timing: &Timing,
    rng: &mut impl Rng,
) -> Vec<Step> {
    let rect = resolve(line);
    let (start_x, mid_y) = rect.pen_start();

    let mut steps = vec![
        Step::emit(timing.settle, Action::SessionStarted { line, name: name.to_owned() }),
        Step::now(Action::HandMoved {
            to: HandPose::new(start_x, mid_y, 0.0),
            duration_ms: millis(timing.travel),
            ease: Ease::PowerTwoInOut,
        }),
        Step::emit(
            timing.travel,
            Action::HandSwapped { style: HandStyle::Writing, duration_ms: millis(timing.hand_swap) },
        ),
    ];

    for (i, (idx, ch)) in name.char_indices().enumerate() {
        let prefix = &name[..idx + ch.len_utf8()];
        let delay = if i == 0 { std::time::Duration::ZERO } else { timing.per_char };
        steps.push(Step::emit(delay, Action::TextRevealed { line, text: prefix.to_owned() }));

        let pen_x = start_x + viewport.x_pct(measure.width_px(prefix) + PEN_GAP_PX);
        let tilt = rng.random_range(-PEN_JITTER_DEG..=PEN_JITTER_DEG);
        steps.push(Step::now(Action::HandMoved {
            to: HandPose::new(pen_x, mid_y, tilt),
            duration_ms: millis(timing.per_char),
            ease: Ease::PowerTwoOut,
        }));
    }

    steps.push(Step::control(timing.per_char + timing.write_pause, StepKind::Commit));
    steps
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
