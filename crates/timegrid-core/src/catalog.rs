//! Distinct course identifiers of a week.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::schedule::{CourseId, Day};

/// Sorted, deduplicated set of the courses appearing anywhere in a week.
///
/// Built from every day of the week, not only the days currently shown,
/// so switching views never changes the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CourseCatalog(BTreeSet<CourseId>);

impl CourseCatalog {
    pub fn from_week(week: &[Day]) -> Self {
        Self(
            week.iter()
                .flatten()
                .map(|slot| slot.course_name.clone())
                .collect(),
        )
    }

    /// Courses in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &CourseId> {
        self.0.iter()
    }

    pub fn contains(&self, course: &str) -> bool {
        self.0.contains(course)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
