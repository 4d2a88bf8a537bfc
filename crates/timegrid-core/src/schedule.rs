//! Schedule types: slots, days and weeks as delivered by the schedule feed.
//!
//! A week is a plain `Vec<Day>` of length 7 (Sunday first) or, in the
//! single-day mode, of length 1. Slots carry their own UTC offset so the
//! local wall clock survives the round trip through the feed.

use std::path::Path;

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Opaque course identifier; equality is exact string match.
pub type CourseId = String;

/// Instant type used for slot bounds.
pub type SlotInstant = DateTime<FixedOffset>;

/// A day's slots, in feed order (not necessarily sorted).
pub type Day = Vec<Slot>;

/// Seven days, or one in the single-day mode.
pub type Week = Vec<Day>;

/// Teacher of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub name: String,
    pub surname: String,
}

impl Professor {
    /// Display name, surname first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.surname, self.name)
    }
}

/// One scheduled class occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub course_name: CourseId,
    pub room: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_time: SlotInstant,
    pub end_time: SlotInstant,
    pub professor: Professor,
}

impl Slot {
    pub fn course_id(&self) -> &str {
        &self.course_name
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Strict interval intersection; touching bounds do not overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    /// Check the `start < end` invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeRange`] when the slot is empty
    /// or inverted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_time < self.end_time {
            Ok(())
        } else {
            Err(ValidationError::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            })
        }
    }

    /// Summary shown when a slot is tapped.
    pub fn details(&self) -> SlotDetails {
        SlotDetails {
            room: self.room.clone(),
            kind: self.kind.clone(),
            time: format!(
                "{} - {} ({})",
                self.start_time.format("%H:%M"),
                self.end_time.format("%H:%M"),
                self.start_time.format("%b %-d, %Y"),
            ),
            professor: self.professor.full_name(),
        }
    }
}

/// Display-ready fields of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDetails {
    pub room: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
    pub professor: String,
}

/// Read a week (JSON array of days) from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a week.
pub fn load_week(path: &Path) -> Result<Week> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Total number of slots across a week.
pub fn slot_count(week: &[Day]) -> usize {
    week.iter().map(Vec::len).sum()
}
