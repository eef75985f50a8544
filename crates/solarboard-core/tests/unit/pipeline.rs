//! Telemetry through row building and ranking.

use solarboard_core::{RowOptions, SpeedReading, Standings, build_rows};

use crate::common::{sample_positions, short_route};

fn ranked() -> Standings {
    let positions = sample_positions();
    let rows = build_rows(&positions.items, &short_route(), &RowOptions::default()).unwrap();
    Standings::rank(rows)
}

#[test]
fn test_non_competing_team_is_dropped() {
    let standings = ranked();
    assert_eq!(standings.len(), 4);
    assert!(standings.rows().iter().all(|row| row.name != "Retired"));
}

#[test]
fn test_positions_follow_distance() {
    let standings = ranked();
    let order: Vec<(usize, &str)> = standings
        .rows()
        .iter()
        .map(|row| (row.position, row.teamnum.as_str()))
        .collect();
    assert_eq!(order, vec![(1, "3"), (2, "21"), (3, "8"), (4, "55")]);
}

#[test]
fn test_gaps_to_leader() {
    let standings = ranked();
    let gaps: Vec<f64> = standings.rows().iter().map(|row| row.gap).collect();
    assert_eq!(gaps, vec![0.0, 62.6, 62.6, 112.7]);
}

#[test]
fn test_stopped_speed_uses_placeholder() {
    let standings = ranked();
    let leader = standings.leader().unwrap();
    assert_eq!(leader.speed, SpeedReading::Stopped("----".to_string()));
    let last = &standings.rows()[3];
    assert_eq!(last.speed.to_string(), "7.8");
}

#[test]
fn test_missing_fields_render_blank() {
    let standings = ranked();
    let anonymous = &standings.rows()[2];
    assert_eq!(anonymous.teamnum, "8");
    assert_eq!(anonymous.name, "");
    assert_eq!(anonymous.car, "");
    assert_eq!(anonymous.avg_speed, 0.0);
}

#[test]
fn test_class_filter_keeps_matching_teams() {
    let positions = sample_positions();
    let options = RowOptions {
        class: Some("Cruiser".to_string()),
        ..RowOptions::default()
    };
    let rows = build_rows(&positions.items, &short_route(), &options).unwrap();
    let standings = Standings::rank(rows);
    assert_eq!(standings.len(), 1);
    assert_eq!(standings.leader().unwrap().name, "Bochum");
    assert_eq!(standings.leader().unwrap().gap, 0.0);
}

#[test]
fn test_slightly_negative_distance_ties_with_zero() {
    let positions: solarboard_core::PositionsResponse = serde_json::from_str(
        r#"{"items": [
            {"teamnum": "A", "distance": -0.01, "competing": true},
            {"teamnum": "B", "distance": 0.0, "competing": true}
        ]}"#,
    )
    .unwrap();
    let route = short_route();
    let rows = build_rows(&positions.items, &route, &RowOptions::default()).unwrap();
    let standings = Standings::rank(rows);
    let order: Vec<&str> = standings.rows().iter().map(|r| r.teamnum.as_str()).collect();
    assert_eq!(order, vec!["A", "B"]);

    let table = solarboard_core::render_table(&standings, &route);
    assert!(!table.contains("-0.0"));
}
