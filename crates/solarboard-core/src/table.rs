//! Plain-text standings table.
//!
//! Output layout:
//!
//! ```text
//!                                                                      DRW   KTH   DLY ...
//! Pos  No.  Team     Car      Class       Dist (km)  Speed   Avg   Gap  Next  Control points   Stage
//!   1  3    Twente   RED X    Challenger      812.4   88.1  79.9   0.0  TNC   [X]===[X]===[X]=>-[ ]...
//! ```
//!
//! The first line places each control-point id over its `[X]` bracket.

use crate::progress::{SEGMENT_WIDTH, START_WIDTH};
use crate::route::Route;
use crate::standings::Standings;

const SEPARATOR: &str = "  ";

/// Shown instead of rows when nobody is competing.
pub const EMPTY_MESSAGE: &str = "No competing teams reported.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    title: &'static str,
    align: Align,
}

const COLUMNS: [Column; 12] = [
    Column { title: "Pos", align: Align::Right },
    Column { title: "No.", align: Align::Left },
    Column { title: "Team", align: Align::Left },
    Column { title: "Car", align: Align::Left },
    Column { title: "Class", align: Align::Left },
    Column { title: "Dist (km)", align: Align::Right },
    Column { title: "Speed", align: Align::Right },
    Column { title: "Avg", align: Align::Right },
    Column { title: "Gap", align: Align::Right },
    Column { title: "Next", align: Align::Left },
    Column { title: "Control points", align: Align::Left },
    Column { title: "Stage", align: Align::Left },
];

const CONTROL_COLUMN: usize = 10;

/// Render the standings as an aligned text table.
///
/// Numeric columns are right-aligned, text columns left-aligned. The
/// returned string ends with a newline.
pub fn render_table(standings: &Standings, route: &Route) -> String {
    let cells: Vec<[String; 12]> = standings
        .rows()
        .iter()
        .map(|row| {
            [
                row.position.to_string(),
                row.teamnum.clone(),
                row.name.clone(),
                row.car.clone(),
                row.class.clone(),
                format!("{:.1}", row.distance),
                row.speed.to_string(),
                format!("{:.1}", row.avg_speed),
                format!("{:.1}", row.gap),
                row.next_control.clone(),
                row.control_bar.clone(),
                row.stage_bar.clone(),
            ]
        })
        .collect();

    let ids = control_point_header(route);

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.title.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths[CONTROL_COLUMN] = widths[CONTROL_COLUMN].max(ids.chars().count());

    let offset: usize = widths[..CONTROL_COLUMN].iter().sum::<usize>()
        + SEPARATOR.len() * CONTROL_COLUMN;

    let mut out = String::new();
    out.push_str(format!("{}{}", " ".repeat(offset), ids).trim_end());
    out.push('\n');

    let titles: Vec<&str> = COLUMNS.iter().map(|c| c.title).collect();
    push_line(&mut out, &titles, &widths);

    if cells.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    for row in &cells {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&mut out, &row, &widths);
    }
    out
}

/// Control-point ids right-aligned to line up with a control-point bar.
///
/// Ids longer than their slot are truncated.
pub fn control_point_header(route: &Route) -> String {
    route
        .points()
        .iter()
        .enumerate()
        .map(|(index, cp)| {
            let width = if index == 0 { START_WIDTH } else { SEGMENT_WIDTH };
            format!("{:>width$.width$}", cp.id)
        })
        .collect()
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line = COLUMNS
        .iter()
        .zip(cells)
        .zip(widths)
        .map(|((column, cell), &width)| match column.align {
            Align::Left => format!("{cell:<width$}"),
            Align::Right => format!("{cell:>width$}"),
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    out.push_str(line.trim_end());
    out.push('\n');
}

// ============================================================================
// Tests
// ============================================================================
