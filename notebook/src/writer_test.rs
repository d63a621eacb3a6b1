use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::measure::FontMetrics;
use crate::timeline::plan_duration;

fn line(n: usize) -> LineNumber {
    LineNumber::new(n).expect("valid line")
}

fn plan(n: usize, name: &str) -> Vec<Step> {
    let viewport = Viewport::default();
    let metrics = FontMetrics::for_viewport(viewport);
    let mut rng = StdRng::seed_from_u64(7);
    plan_writing(line(n), name, &metrics, viewport, &Timing::default(), &mut rng)
}

fn reveals(steps: &[Step]) -> Vec<String> {
    steps
        .iter()
        .filter_map(|step| match &step.kind {
            StepKind::Emit(Action::TextRevealed { text, .. }) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn pen_moves(steps: &[Step]) -> Vec<HandPose> {
    steps
        .iter()
        .filter_map(|step| match &step.kind {
            StepKind::Emit(Action::HandMoved { to, .. }) => Some(*to),
            _ => None,
        })
        .collect()
}

#[test]
fn plan_opens_with_session_start_on_target_line() {
    let steps = plan(4, "Near");
    assert_eq!(steps[0].delay, Duration::from_millis(100));
    assert_eq!(steps[0].kind, StepKind::Emit(Action::SessionStarted { line: line(4), name: "Near".into() }));
}

#[test]
fn pen_travels_to_line_start_before_typing() {
    let steps = plan(7, "Near");
    let first_move = pen_moves(&steps)[0];
    assert!((first_move.x - 60.0).abs() < 1e-9);
    assert!((first_move.y - 24.0).abs() < 1e-9);
    assert!(first_move.rotation.abs() < f64::EPSILON);
}

#[test]
fn reveals_one_character_at_a_time() {
    assert_eq!(reveals(&plan(0, "Ryuk")), vec!["R", "Ry", "Ryu", "Ryuk"]);
}

#[test]
fn reveals_respect_multibyte_characters() {
    assert_eq!(reveals(&plan(0, "Lé夜")), vec!["L", "Lé", "Lé夜"]);
}

#[test]
fn pen_tracks_growing_text_with_bounded_tilt() {
    let steps = plan(0, "Light Yagami");
    let typing_moves = &pen_moves(&steps)[1..];
    assert_eq!(typing_moves.len(), "Light Yagami".len());
    for pair in typing_moves.windows(2) {
        assert!(pair[1].x > pair[0].x, "pen should move right");
    }
    for pose in typing_moves {
        assert!(pose.rotation.abs() <= 1.0, "tilt {} out of bounds", pose.rotation);
        assert!(pose.x > 10.0);
    }
}

#[test]
fn characters_are_one_quantum_apart() {
    let steps = plan(0, "Mello");
    let delays: Vec<Duration> = steps
        .iter()
        .filter(|step| matches!(step.kind, StepKind::Emit(Action::TextRevealed { .. })))
        .map(|step| step.delay)
        .collect();
    assert_eq!(delays[0], Duration::ZERO);
    assert!(delays[1..].iter().all(|d| *d == Duration::from_millis(200)));
}

#[test]
fn plan_ends_with_commit_after_pause() {
    let steps = plan(0, "L");
    let last = steps.last().expect("non-empty plan");
    assert_eq!(last.kind, StepKind::Commit);
    assert_eq!(last.delay, Duration::from_millis(700));
}

#[test]
fn total_duration_scales_with_name_length() {
    // settle + travel + (n - 1) quanta + final quantum + pause
    assert_eq!(plan_duration(&plan(0, "Near")), Duration::from_millis(100 + 800 + 3 * 200 + 200 + 500));
}
