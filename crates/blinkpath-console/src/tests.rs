//! Tests for event formatting.

use super::*;

fn visitor(event: &str) -> EventVisitor {
    EventVisitor {
        event: Some(event.to_string()),
        ..EventVisitor::default()
    }
}

#[test]
fn test_unknown_event_is_silent() {
    assert!(format_event(&visitor("step")).is_empty());
    assert!(format_event(&EventVisitor::default()).is_empty());
}

#[test]
fn test_solve_start_lists_scale() {
    let v = EventVisitor {
        level_length: Some(3),
        horizon: Some(9),
        variable_count: Some(27),
        constraint_count: Some(1234),
        backend: Some("microlp".to_string()),
        ..visitor("solve_start")
    };
    let out = format_event(&v);
    assert!(out.contains("Solving"));
    assert!(out.contains("1,234"));
    assert!(out.contains("microlp"));
}

#[test]
fn test_solve_end_statuses() {
    let completed = EventVisitor {
        completed_at: Some(8),
        objective: Some(30.6667),
        ..visitor("solve_end")
    };
    assert!(format_event(&completed).contains("COMPLETED"));
    assert!(format_event(&completed).contains("30.6667"));

    let unreachable = EventVisitor {
        horizon: Some(12),
        ..visitor("solve_end")
    };
    assert!(format_event(&unreachable).contains("UNREACHABLE"));

    assert!(format_event(&visitor("solve_end")).contains("TRIVIAL"));
}

#[test]
fn test_constraints_built() {
    let v = EventVisitor {
        family: Some("jump-window".to_string()),
        count: Some(16),
        ..visitor("constraints_built")
    };
    let out = format_event(&v);
    assert!(out.contains("jump-window"));
    assert!(out.contains("16"));
}
