//! Property-based tests for ranking and rendering.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::progress::{control_point_progress, stage_progress};
    use crate::route::Route;
    use crate::rows::{RowOptions, build_rows};
    use crate::standings::Standings;
    use crate::telemetry::TelemetryRecord;
    use proptest::prelude::*;

    fn record() -> impl Strategy<Value = TelemetryRecord> {
        // Coarse distances so ties actually happen
        (0u32..40, 0.0f64..120.0, any::<bool>()).prop_map(|(step, speed, competing)| {
            TelemetryRecord {
                distance: f64::from(step) * 75.0,
                speed,
                competing,
                ..TelemetryRecord::default()
            }
        })
    }

    fn records() -> impl Strategy<Value = Vec<TelemetryRecord>> {
        prop::collection::vec(record(), 0..24).prop_map(|mut records| {
            for (index, record) in records.iter_mut().enumerate() {
                record.teamnum = index.to_string();
            }
            records
        })
    }

    proptest! {
        #[test]
        fn test_non_competing_never_ranked(records in records()) {
            let rows = build_rows(&records, &Route::default(), &RowOptions::default()).unwrap();
            let standings = Standings::rank(rows);
            for row in standings.rows() {
                let index: usize = row.teamnum.parse().unwrap();
                prop_assert!(records[index].competing);
            }
            let competing = records.iter().filter(|r| r.competing).count();
            prop_assert_eq!(standings.len(), competing);
        }

        #[test]
        fn test_ranking_is_stable_descending(records in records()) {
            let rows = build_rows(&records, &Route::default(), &RowOptions::default()).unwrap();
            let standings = Standings::rank(rows);
            for (index, pair) in standings.rows().windows(2).enumerate() {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.distance >= b.distance);
                prop_assert_eq!(a.position, index + 1);
                prop_assert_eq!(b.position, index + 2);
                if a.distance == b.distance {
                    let a_input: usize = a.teamnum.parse().unwrap();
                    let b_input: usize = b.teamnum.parse().unwrap();
                    prop_assert!(a_input < b_input);
                }
            }
        }

        #[test]
        fn test_leader_gap_is_zero(records in records()) {
            let rows = build_rows(&records, &Route::default(), &RowOptions::default()).unwrap();
            let standings = Standings::rank(rows);
            if let Some(leader) = standings.leader() {
                prop_assert_eq!(leader.gap, 0.0);
                prop_assert!(standings.rows().iter().all(|r| r.gap >= 0.0));
            }
        }

        #[test]
        fn test_control_bar_has_fixed_width(distance in -100.0f64..4000.0) {
            let distances = Route::default().distances();
            let bar = control_point_progress(distance, &distances);
            prop_assert_eq!(bar.len(), 3 + 6 * (distances.len() - 1));
            prop_assert!(bar.starts_with("[X]"));
        }

        #[test]
        fn test_stage_bar_has_fixed_width(distance in -100.0f64..4000.0, length in 1usize..64) {
            let distances = Route::default().distances();
            let bar = stage_progress(distance, &distances, length).unwrap();
            prop_assert_eq!(bar.chars().count(), length + 3);
            prop_assert_eq!(bar.matches('^').count(), 1);
        }
    }
}
