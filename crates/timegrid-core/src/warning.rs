//! Non-fatal problems reported alongside a render model.

use serde::Serialize;

use crate::schedule::{CourseId, SlotInstant};

/// Something the layout skipped; the rest of the model is still valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// A slot with `start >= end` was left out of its day.
    MalformedSlot {
        day: usize,
        index: usize,
        course: CourseId,
        start: SlotInstant,
        end: SlotInstant,
    },
    /// The selected day is not among the visible days.
    DayOutOfRange { selected: usize, visible: usize },
}

impl std::fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedSlot {
                day,
                index,
                course,
                start,
                end,
            } => write!(
                f,
                "day {day}, slot {index} ({course}): start {start} is not before end {end}"
            ),
            Self::DayOutOfRange { selected, visible } => {
                write!(f, "day {selected} selected but only {visible} days are visible")
            }
        }
    }
}
