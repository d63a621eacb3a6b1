//! Strike-through flourish played after every successful write.
//!
//! The pen tilts in at the end of the freshly written name, draws a strike
//! mark back to the start of the line while moving with its leading edge,
//! then swaps to the resting hand and returns home. The plan ends with a
//! [`StepKind::Finish`] control step.

use crate::consts::{CUT_APPROACH_ROTATION_DEG, CUT_STROKE_ROTATION_DEG};
use crate::hand::{Ease, HandPose, HandStyle};
use crate::layout::{LineNumber, resolve};
use crate::measure::{TextMeasure, Viewport};
use crate::timeline::{Action, Step, StepKind, Timing, millis};

pub fn plan_strike(
    line: LineNumber,
    text: &str,
    measure: &dyn TextMeasure,
    viewport: Viewport,
    timing: &Timing,
) -> Vec<Step> {
    let rect = resolve(line);
    let (start_x, mid_y) = rect.pen_start();
    let (end_x, _) = rect.pen_end(viewport.x_pct(measure.width_px(text)));

    vec![
        Step::now(Action::HandMoved {
            to: HandPose::new(end_x, mid_y, CUT_APPROACH_ROTATION_DEG),
            duration_ms: millis(timing.cut_approach),
            ease: Ease::PowerTwoInOut,
        }),
        Step::emit(
            timing.cut_approach,
            Action::StrikeStarted { line, from_x: end_x, to_x: start_x, duration_ms: millis(timing.cut_stroke) },
        ),
        Step::now(Action::HandMoved {
            to: HandPose::new(start_x, mid_y, CUT_STROKE_ROTATION_DEG),
            duration_ms: millis(timing.cut_stroke),
            ease: Ease::PowerOneInOut,
        }),
        Step::emit(timing.cut_stroke, Action::StrikeCompleted { line }),
        Step::now(Action::HandSwapped { style: HandStyle::Resting, duration_ms: millis(timing.rest_swap) }),
        Step::now(Action::HandMoved {
            to: HandPose::REST,
            duration_ms: millis(timing.rest_return),
            ease: Ease::PowerTwoInOut,
        }),
        Step::control(timing.rest_return, StepKind::Finish),
    ]
}

#[cfg(test)]
#[path = "strike_test.rs"]
mod tests;
