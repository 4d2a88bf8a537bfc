//! Timetable layout: from a week of slots to boxes on a grid.
//!
//! [`layout`] is a pure function of its inputs and is meant to be called
//! again on every change of the week, the configuration or the view. The
//! only state it wants preserved is handed back as a [`ConfigDelta`].

mod geometry;
mod view;

pub use geometry::{project, Geometry, LayoutOptions, ROWS_PER_VIEWPORT};
pub use view::{shown_days, visible_days, ViewMode};

use serde::Serialize;

use crate::catalog::CourseCatalog;
use crate::overlap::{resolve_day, ColumnAssignment};
use crate::priority::{extend_priority, PriorityUpdate};
use crate::schedule::{Day, Slot};
use crate::storage::{ConfigDelta, TimetableConfig};
use crate::warning::LayoutWarning;

/// A slot with its column and box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedSlot {
    pub slot: Slot,
    pub assignment: ColumnAssignment,
    pub geometry: Geometry,
}

/// One on-screen day column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    /// Index into the week.
    pub day: usize,
    /// Left-to-right position among the shown days.
    pub position: usize,
    /// Ordered by start, then end, then feed order.
    pub slots: Vec<PlacedSlot>,
}

/// Everything the rendering surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub days: Vec<DayLayout>,
    pub row_height: f64,
    pub warnings: Vec<LayoutWarning>,
    /// Configuration change to persist, if any.
    pub config_delta: Option<ConfigDelta>,
}

/// Lay out `week` for `view`.
///
/// The course catalog is taken from the whole week so the priority list
/// grows the same way whichever day is shown. Newly seen courses are
/// ranked immediately; persisting them is up to the caller.
pub fn layout(
    week: &[Day],
    config: &TimetableConfig,
    view: ViewMode,
    options: &LayoutOptions,
) -> RenderModel {
    let catalog = CourseCatalog::from_week(week);
    let current = config.priority_list();
    let update = extend_priority(&current, &catalog, config.flags());
    let config_delta = match &update {
        PriorityUpdate::Extended { list, .. } => Some(ConfigDelta::TimetablePriority(list.clone())),
        PriorityUpdate::Unchanged => None,
    };
    let priority = update.resolve(current);

    let mut warnings = Vec::new();
    let shown = shown_days(week.len(), view).unwrap_or_else(|| {
        if let ViewMode::Day { selected } = view {
            warnings.push(LayoutWarning::DayOutOfRange {
                selected,
                visible: visible_days(week.len()).len(),
            });
        }
        Vec::new()
    });

    let mut days = Vec::with_capacity(shown.len());
    for (position, &day_index) in shown.iter().enumerate() {
        let day = &week[day_index];
        let resolution = resolve_day(day, Some(&priority), config.timetable_overlap);

        warnings.extend(resolution.malformed.iter().map(|&index| {
            let slot = &day[index];
            LayoutWarning::MalformedSlot {
                day: day_index,
                index,
                course: slot.course_name.clone(),
                start: slot.start_time,
                end: slot.end_time,
            }
        }));

        let mut slots: Vec<PlacedSlot> = resolution
            .assignments
            .iter()
            .enumerate()
            .filter_map(|(index, assignment)| {
                let assignment = (*assignment)?;
                let slot = &day[index];
                Some(PlacedSlot {
                    slot: slot.clone(),
                    assignment,
                    geometry: project(slot, assignment, position, shown.len(), options),
                })
            })
            .collect();
        slots.sort_by_key(|placed| (placed.slot.start_time, placed.slot.end_time));

        days.push(DayLayout {
            day: day_index,
            position,
            slots,
        });
    }

    RenderModel {
        days,
        row_height: options.row_height,
        warnings,
        config_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::fixtures::slot;

    fn options() -> LayoutOptions {
        LayoutOptions {
            available_width: 532.0,
            row_height: 40.0,
            margin: 32.0,
            day_start_minutes: 8 * 60,
            row_minutes: 60,
        }
    }

    fn week_with(monday: Day) -> Vec<Day> {
        let mut week = vec![Vec::new(); 7];
        week[1] = monday;
        week
    }

    fn config(priority: Option<&[&str]>) -> TimetableConfig {
        TimetableConfig {
            timetable_overlap: true,
            timetable_priority: priority.map(|ids| ids.iter().map(|id| id.to_string()).collect()),
        }
    }

    #[test]
    fn week_view_lays_out_weekdays() {
        let week = week_with(vec![slot("A", "09:00", "10:00")]);
        let model = layout(&week, &config(Some(&["A"])), ViewMode::Week, &options());

        assert_eq!(model.days.len(), 5);
        assert_eq!(model.days[0].day, 1);
        assert_eq!(model.row_height, 40.0);
        let placed = &model.days[0].slots[0];
        assert_eq!(placed.geometry.x, 32.0);
        assert_eq!(placed.geometry.width, 100.0);
        assert!(model.config_delta.is_none());
    }

    #[test]
    fn new_courses_rank_immediately_and_are_reported() {
        let week = week_with(vec![
            slot("A", "09:00", "10:00"),
            slot("B", "09:30", "10:30"),
        ]);
        let model = layout(&week, &config(Some(&["B"])), ViewMode::Week, &options());

        let monday = &model.days[0];
        let columns: Vec<_> = monday
            .slots
            .iter()
            .map(|p| (p.slot.course_name.as_str(), p.assignment.column))
            .collect();
        assert_eq!(columns, vec![("A", 1), ("B", 0)]);
        match &model.config_delta {
            Some(ConfigDelta::TimetablePriority(list)) => assert_eq!(list.as_slice(), ["B", "A"]),
            None => panic!("expected a priority delta"),
        }
    }

    #[test]
    fn malformed_slot_is_warned_and_skipped() {
        let week = week_with(vec![
            slot("A", "09:00", "10:00"),
            slot("Bad", "11:00", "11:00"),
        ]);
        let model = layout(&week, &config(None), ViewMode::Day { selected: 1 }, &options());

        assert_eq!(model.days.len(), 1);
        assert_eq!(model.days[0].slots.len(), 1);
        assert!(matches!(
            &model.warnings[..],
            [LayoutWarning::MalformedSlot { day: 1, index: 1, .. }]
        ));
    }

    #[test]
    fn out_of_range_day_yields_empty_model() {
        let week = week_with(vec![slot("A", "09:00", "10:00")]);
        let model = layout(&week, &config(None), ViewMode::Day { selected: 9 }, &options());
        assert!(model.days.is_empty());
        assert_eq!(
            model.warnings,
            vec![LayoutWarning::DayOutOfRange { selected: 9, visible: 5 }]
        );
    }

    #[test]
    fn empty_week_is_valid() {
        let model = layout(&[], &config(Some(&[])), ViewMode::Week, &options());
        assert!(model.days.is_empty());
        assert!(model.warnings.is_empty());
        assert!(model.config_delta.is_none());
    }
}
