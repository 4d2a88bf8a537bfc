//! Overlap resolution for a single day.
//!
//! Slots whose intervals intersect, directly or through a chain of other
//! slots, form an [`OverlapGroup`]. Each group is split into side-by-side
//! columns; higher-priority courses take the leftmost columns.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::priority::PriorityList;
use crate::schedule::{Slot, SlotInstant};

/// Horizontal placement of a slot inside its overlap group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    pub column: usize,
    pub total_columns: usize,
}

impl ColumnAssignment {
    /// Full-width placement.
    pub const SINGLE: Self = Self {
        column: 0,
        total_columns: 1,
    };
}

/// Maximal set of transitively overlapping slots, as indices into the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapGroup {
    /// Sorted by start, then end, then input position.
    pub members: Vec<usize>,
}

/// Column assignments for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayResolution {
    /// Parallel to the input day; `None` for malformed slots.
    pub assignments: Vec<Option<ColumnAssignment>>,
    /// Input positions of slots excluded because `start >= end`.
    pub malformed: Vec<usize>,
}

/// Partition the well-formed slots of `day` into overlap groups.
///
/// A slot starting exactly when the running cluster ends opens a new
/// group.
pub fn group_overlaps(day: &[Slot]) -> Vec<OverlapGroup> {
    let order = chronological(day, well_formed(day));
    sweep(day, &order)
        .into_iter()
        .map(|members| OverlapGroup { members })
        .collect()
}

/// Assign a column to every well-formed slot of `day`.
///
/// With `overlap_enabled` off every slot spans the full day column and
/// overlapping slots are simply drawn on top of each other. Courses
/// missing from `priority` rank after every listed course.
pub fn resolve_day(
    day: &[Slot],
    priority: Option<&PriorityList>,
    overlap_enabled: bool,
) -> DayResolution {
    let mut resolution = DayResolution {
        assignments: vec![None; day.len()],
        malformed: Vec::new(),
    };

    let mut valid = Vec::with_capacity(day.len());
    for (index, slot) in day.iter().enumerate() {
        match slot.validate() {
            Ok(()) => valid.push(index),
            Err(e) => {
                warn!(course = %slot.course_name, index, "skipping slot: {e}");
                resolution.malformed.push(index);
            }
        }
    }

    if !overlap_enabled {
        for index in valid {
            resolution.assignments[index] = Some(ColumnAssignment::SINGLE);
        }
        return resolution;
    }

    let order = chronological(day, valid);
    for group in sweep(day, &order) {
        pack_group(day, &group, priority, &mut resolution.assignments);
    }
    resolution
}

fn well_formed(day: &[Slot]) -> Vec<usize> {
    day.iter()
        .enumerate()
        .filter(|(_, slot)| slot.validate().is_ok())
        .map(|(index, _)| index)
        .collect()
}

fn chronological(day: &[Slot], mut indices: Vec<usize>) -> Vec<usize> {
    indices.sort_by_key(|&i| (day[i].start_time, day[i].end_time, i));
    indices
}

fn sweep(day: &[Slot], order: &[usize]) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut cluster_end: Option<SlotInstant> = None;

    for &index in order {
        let slot = &day[index];
        match cluster_end {
            Some(end) if slot.start_time < end => {
                if let Some(group) = groups.last_mut() {
                    group.push(index);
                }
                cluster_end = Some(end.max(slot.end_time));
            }
            _ => {
                groups.push(vec![index]);
                cluster_end = Some(slot.end_time);
            }
        }
    }
    groups
}

fn pack_group(
    day: &[Slot],
    group: &[usize],
    priority: Option<&PriorityList>,
    assignments: &mut [Option<ColumnAssignment>],
) {
    let mut placement = group.to_vec();
    placement.sort_by_key(|&i| {
        let rank = priority.and_then(|list| list.rank(&day[i].course_name));
        (rank.is_none(), rank, day[i].start_time, i)
    });

    // End instant of the last slot placed in each column.
    let mut column_ends: Vec<SlotInstant> = Vec::new();
    let mut columns = Vec::with_capacity(placement.len());
    for &index in &placement {
        let slot = &day[index];
        let column = match column_ends.iter().position(|&end| end <= slot.start_time) {
            Some(column) => {
                column_ends[column] = slot.end_time;
                column
            }
            None => {
                column_ends.push(slot.end_time);
                column_ends.len() - 1
            }
        };
        columns.push((index, column));
    }

    let total_columns = column_ends.len();
    for (index, column) in columns {
        assignments[index] = Some(ColumnAssignment {
            column,
            total_columns,
        });
    }
}
