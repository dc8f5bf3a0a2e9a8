//! Tests for level parsing and blink timing.

use super::*;

fn class(period: u8) -> BlinkClass {
    BlinkClass::new(period).unwrap()
}

#[test]
fn test_parse_all_markers() {
    let level = Level::parse("x.12345").unwrap();
    assert_eq!(level.len(), 7);
    assert_eq!(level.cell(0), Some(Cell::Platform));
    assert_eq!(level.cell(1), Some(Cell::Blink(BlinkClass::EMPTY)));
    assert_eq!(level.cell(6), Some(Cell::Blink(class(5))));
    assert_eq!(level.cell(7), None);
}

#[test]
fn test_parse_rejects_unknown_marker() {
    let err = Level::parse("xx6x").unwrap_err();
    assert_eq!(
        err,
        LevelError::UnknownCell {
            marker: '6',
            position: 2
        }
    );
}

#[test]
fn test_parse_reports_first_unknown_marker() {
    let err = "x0?".parse::<Level>().unwrap_err();
    assert_eq!(
        err,
        LevelError::UnknownCell {
            marker: '0',
            position: 1
        }
    );
}

#[test]
fn test_display_round_trips_markers() {
    let level = Level::parse("x.3x").unwrap();
    assert_eq!(level.to_string(), "x.3x");
}

#[test]
fn test_trivial_levels() {
    assert!(Level::parse("").unwrap().is_trivial());
    assert!(Level::parse("x").unwrap().is_trivial());
    assert!(!Level::parse("xx").unwrap().is_trivial());
    assert_eq!(Level::parse("").unwrap().goal(), None);
    assert_eq!(Level::parse("xxx").unwrap().goal(), Some(2));
}

#[test]
fn test_blink_index_groups_repeated_markers() {
    let level = Level::parse("x2.2x.1").unwrap();
    let index = level.blink_index();

    assert_eq!(index.positions(BlinkClass::EMPTY), &[2, 5]);
    assert_eq!(index.positions(class(1)), &[6]);
    assert_eq!(index.positions(class(2)), &[1, 3]);
    assert!(index.positions(class(3)).is_empty());
    assert_eq!(index.indexed_count(), 5);
}

#[test]
fn test_blink_index_has_every_class() {
    let index = Level::parse("xxx").unwrap().blink_index();
    let classes: Vec<u8> = index.iter().map(|(c, _)| c.period()).collect();
    assert_eq!(classes, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(index.indexed_count(), 0);
}

#[test]
fn test_blink_index_matches_marker_scan() {
    let raw = "x1.23.45x1";
    let index = Level::parse(raw).unwrap().blink_index();
    for class in BlinkClass::all() {
        assert_eq!(index.positions(class), positions_of(raw, class.marker()));
    }
}

#[test]
fn test_class_bounds() {
    assert!(BlinkClass::new(5).is_some());
    assert!(BlinkClass::new(6).is_none());
    assert_eq!(class(4).marker(), '4');
    assert_eq!(BlinkClass::EMPTY.marker(), '.');
}

#[test]
fn test_empty_class_never_present() {
    assert!((0..50).all(|t| !is_present(BlinkClass::EMPTY, t)));
}

#[test]
fn test_period_one_alternates() {
    let visible: Vec<bool> = (0..6).map(|t| is_present(class(1), t)).collect();
    assert_eq!(visible, vec![false, true, false, true, false, true]);
}

#[test]
fn test_period_counts_from_step_one() {
    // Invisible for k steps, visible on the step after.
    for period in 1..=MAX_BLINK_PERIOD {
        let k = period as usize;
        let c = class(period);
        for t in 0..k {
            assert!(!is_present(c, t), "period {period} visible at step {t}");
        }
        assert!(is_present(c, k));
        assert!(!is_present(c, k + 1));
        assert!(is_present(c, 2 * k + 1));
    }
}

#[test]
fn test_cell_presence() {
    assert!(Cell::Platform.is_present_at(0));
    assert!(!Cell::Blink(class(3)).is_present_at(0));
    assert!(Cell::Blink(class(3)).is_present_at(3));
    assert_eq!(Cell::Platform.blink_class(), None);
}
