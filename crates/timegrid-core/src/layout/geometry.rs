//! Projection of column assignments onto the timetable grid.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::overlap::ColumnAssignment;
use crate::schedule::Slot;

/// Rows the viewport height is divided into when deriving the row unit.
pub const ROWS_PER_VIEWPORT: f64 = 15.0;

/// Grid dimensions. All lengths share one unit (pixels or points).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Width of the whole grid, time axis included.
    pub available_width: f64,
    /// Height of one row.
    pub row_height: f64,
    /// Leading space reserved for the time axis.
    pub margin: f64,
    /// Local time of the grid's top edge, in minutes after midnight.
    pub day_start_minutes: u32,
    /// Minutes covered by one row.
    pub row_minutes: u32,
}

impl LayoutOptions {
    /// Defaults for a viewport: one hour per row, 15 rows per screen
    /// height, grid starting at 08:00.
    pub fn for_viewport(width: f64, height: f64) -> Self {
        Self {
            available_width: width,
            row_height: height / ROWS_PER_VIEWPORT,
            margin: 32.0,
            day_start_minutes: 8 * 60,
            row_minutes: 60,
        }
    }

    fn row_seconds(&self) -> f64 {
        f64::from(self.row_minutes.max(1)) * 60.0
    }

    /// Width of a single day column for `visible_days` columns.
    pub fn day_column_width(&self, visible_days: usize) -> f64 {
        (self.available_width - self.margin).max(0.0) / visible_days.max(1) as f64
    }
}

/// Absolute box of a slot on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Box for `slot` drawn in the `position`-th of `visible_days` columns.
pub fn project(
    slot: &Slot,
    assignment: ColumnAssignment,
    position: usize,
    visible_days: usize,
    options: &LayoutOptions,
) -> Geometry {
    let row_seconds = options.row_seconds();
    let since_midnight = f64::from(slot.start_time.time().num_seconds_from_midnight());
    let offset_seconds = since_midnight - f64::from(options.day_start_minutes) * 60.0;
    let duration_seconds = slot.duration().num_seconds() as f64;

    let day_width = options.day_column_width(visible_days);
    let total = assignment.total_columns.max(1) as f64;

    Geometry {
        x: options.margin
            + position as f64 * day_width
            + assignment.column as f64 / total * day_width,
        y: offset_seconds / row_seconds * options.row_height,
        width: day_width / total,
        height: duration_seconds / row_seconds * options.row_height,
    }
}
