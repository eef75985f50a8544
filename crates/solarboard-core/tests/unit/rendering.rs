//! Progress bars and the final table.

use solarboard_core::{
    Error, RowOptions, Standings, build_rows, control_point_progress, render_table,
    stage_progress,
};

use crate::common::{sample_positions, short_route};

const CPS: [f64; 3] = [0.0, 100.0, 300.0];

fn fill(bar: &str) -> usize {
    bar.chars().filter(|&c| c == '=').count()
}

#[test]
fn test_control_bar_at_zero_is_all_ahead() {
    assert_eq!(control_point_progress(0.0, &CPS), "[X]---[ ]---[ ]");
}

#[test]
fn test_control_bar_at_total_distance_is_all_passed() {
    assert_eq!(control_point_progress(300.0, &CPS), "[X]===[X]===[X]");
}

#[test]
fn test_control_bar_in_transit_towards_last_point() {
    assert!(control_point_progress(150.0, &CPS).ends_with("=>-[ ]"));
}

#[test]
fn test_stage_bar_halfway_through_first_stage() {
    assert_eq!(fill(&stage_progress(50.0, &CPS, 20).unwrap()), 10);
}

#[test]
fn test_stage_bar_boundary_tie_break() {
    // On an interior control point the later stage wins
    assert_eq!(fill(&stage_progress(100.0, &CPS, 20).unwrap()), 0);
    assert_eq!(fill(&stage_progress(300.0, &CPS, 20).unwrap()), 20);
    assert_eq!(fill(&stage_progress(0.0, &CPS, 20).unwrap()), 0);
}

#[test]
fn test_stage_bar_rejects_zero_length_stage() {
    let err = stage_progress(50.0, &[0.0, 0.0, 300.0], 20).unwrap_err();
    assert!(matches!(err, Error::Data { .. }));
}

#[test]
fn test_rendered_table() {
    let route = short_route();
    let positions = sample_positions();
    let rows = build_rows(&positions.items, &route, &RowOptions::default()).unwrap();
    let table = render_table(&Standings::rank(rows), &route);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines[0].trim_start().starts_with("S     M     F"));
    assert!(lines[2].contains("Brunel"));
    assert!(lines[2].contains("----"));
    assert!(lines[2].contains("[X]===[X]=>-[ ]"));
    assert!(lines[3].contains("Agoria"));
    assert!(lines[3].contains("84.4"));
    assert!(lines[5].contains("Bochum"));
    assert!(lines[5].contains("[X]=>-[ ]---[ ]"));
    assert!(lines[5].contains(&format!("|{}^{}|", "=".repeat(19), " ".repeat(1))));
    assert!(!table.contains("Retired"));
}
