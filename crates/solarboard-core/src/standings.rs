//! Race order and gaps.

use std::cmp::Ordering;

use crate::rows::{DisplayRow, round1};

/// Rows in race order, with positions and gaps filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings {
    rows: Vec<DisplayRow>,
}

impl Standings {
    /// Rank rows by distance, furthest first.
    ///
    /// The sort is stable, so teams on the same distance keep their input
    /// order. Positions are 1-based and the gap is measured to the leader,
    /// whose own gap is exactly zero.
    pub fn rank(mut rows: Vec<DisplayRow>) -> Self {
        rows.sort_by(|a, b| {
            b.distance
                .partial_cmp(&a.distance)
                .unwrap_or(Ordering::Equal)
        });

        let leader = rows.first().map_or(0.0, |row| row.distance);
        for (index, row) in rows.iter_mut().enumerate() {
            row.position = index + 1;
            row.gap = round1(leader - row.distance);
        }
        Self { rows }
    }

    /// Ranked rows, leader first.
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// The leading row, if any team is competing.
    pub fn leader(&self) -> Option<&DisplayRow> {
        self.rows.first()
    }

    /// Number of ranked teams.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no team is ranked.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
