#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::WRITABLE_HEIGHT_PCT;

#[test]
fn line_zero_is_left_page_first_row() {
    let rect = resolve_index(0).expect("line 0");
    assert_eq!(rect, SlotRect { page: Page::Left, x: 10.0, y: 20.0, width: 30.0, height: 8.0 });
}

#[test]
fn line_seven_is_right_page_first_row() {
    let rect = resolve_index(7).expect("line 7");
    assert_eq!(rect, SlotRect { page: Page::Right, x: 60.0, y: 20.0, width: 30.0, height: 8.0 });
}

#[test]
fn line_thirteen_is_right_page_last_row() {
    let rect = resolve_index(13).expect("line 13");
    assert_eq!(rect, SlotRect { page: Page::Right, x: 60.0, y: 68.0, width: 30.0, height: 8.0 });
}

#[test]
fn line_six_is_left_page_last_row() {
    let line = LineNumber::new(6).expect("line 6");
    assert_eq!(line.page(), Page::Left);
    assert_eq!(line.row(), 6);
    assert_eq!(resolve(line).y, 68.0);
}

#[test]
fn rows_step_by_line_height() {
    for line in LineNumber::all() {
        let rect = resolve(line);
        assert_eq!(rect.y, 20.0 + f64::from(line.row()) * 8.0, "line {line}");
    }
}

#[test]
fn every_line_fits_inside_writable_band() {
    for line in LineNumber::all() {
        let rect = resolve(line);
        assert!(rect.y + rect.height <= WRITABLE_TOP_PCT + WRITABLE_HEIGHT_PCT, "line {line}");
    }
}

#[test]
fn out_of_range_line_is_rejected() {
    assert_eq!(LineNumber::new(14), Err(LayoutError::OutOfRange(14)));
    assert_eq!(resolve_index(99), Err(LayoutError::OutOfRange(99)));
}

#[test]
fn page_row_round_trips_line_number() {
    for line in LineNumber::all() {
        let rebuilt = LineNumber::from_page_row(line.page(), line.row()).expect("valid row");
        assert_eq!(rebuilt, line);
    }
    assert!(LineNumber::from_page_row(Page::Right, 7).is_err());
}

#[test]
fn all_yields_fourteen_lines_in_order() {
    let lines: Vec<usize> = LineNumber::all().map(LineNumber::index).collect();
    assert_eq!(lines, (0..14).collect::<Vec<_>>());
}

#[test]
fn pen_anchors_sit_on_line_centre() {
    let rect = resolve_index(2).expect("line 2");
    assert_eq!(rect.pen_start(), (10.0, 40.0));
    assert_eq!(rect.pen_end(12.5), (22.5, 40.0));
}

#[test]
fn line_number_serializes_as_plain_index() {
    let line = LineNumber::new(9).expect("line 9");
    assert_eq!(serde_json::to_string(&line).expect("serialize"), "9");
    let back: LineNumber = serde_json::from_str("9").expect("deserialize");
    assert_eq!(back, line);
    assert!(serde_json::from_str::<LineNumber>("14").is_err());
}
