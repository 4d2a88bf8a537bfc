//! Persisted per-course priority order used to break overlap ties.
//!
//! The list only ever grows: courses seen for the first time are appended
//! after every known course, in catalog (lexicographic) order. Reordering
//! known entries is left to the user-facing settings screen.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CourseCatalog;
use crate::schedule::CourseId;

/// Ordered course identifiers without duplicates. Lower index wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityList(Vec<CourseId>);

impl PriorityList {
    /// Build a list, dropping repeated ids after their first occurrence.
    pub fn new(ids: impl IntoIterator<Item = CourseId>) -> Self {
        let mut list = Self::default();
        for id in ids {
            if !list.contains(&id) {
                list.0.push(id);
            }
        }
        list
    }

    /// Position of a course, `None` when unranked.
    pub fn rank(&self, course: &str) -> Option<usize> {
        self.0.iter().position(|id| id == course)
    }

    pub fn contains(&self, course: &str) -> bool {
        self.rank(course).is_some()
    }

    pub fn as_slice(&self) -> &[CourseId] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<CourseId> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<CourseId>> for PriorityList {
    fn from(ids: Vec<CourseId>) -> Self {
        Self::new(ids)
    }
}

/// Feature switches read from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityFlags {
    pub overlap_enabled: bool,
    pub priority_enabled: bool,
}

impl PriorityFlags {
    fn active(self) -> bool {
        self.overlap_enabled && self.priority_enabled
    }
}

/// Outcome of [`extend_priority`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorityUpdate {
    /// Nothing new; no persistence write is needed.
    Unchanged,
    /// New courses were appended.
    Extended {
        list: PriorityList,
        appended: Vec<CourseId>,
    },
}

impl PriorityUpdate {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Extended { .. })
    }

    /// The list to use for layout: the extension, or `current` itself.
    pub fn resolve(self, current: PriorityList) -> PriorityList {
        match self {
            Self::Unchanged => current,
            Self::Extended { list, .. } => list,
        }
    }
}

/// Append every catalog course missing from `current`.
///
/// Returns [`PriorityUpdate::Unchanged`] when either flag is off or when
/// the catalog holds no unseen course, so repeated calls with the same
/// catalog never request another write.
pub fn extend_priority(
    current: &PriorityList,
    catalog: &CourseCatalog,
    flags: PriorityFlags,
) -> PriorityUpdate {
    if !flags.active() {
        return PriorityUpdate::Unchanged;
    }

    let appended: Vec<CourseId> = catalog
        .iter()
        .filter(|course| !current.contains(course))
        .cloned()
        .collect();

    if appended.is_empty() {
        return PriorityUpdate::Unchanged;
    }

    debug!(
        known = current.len(),
        appended = appended.len(),
        "extending course priority list"
    );

    let mut list = current.clone();
    list.0.extend(appended.iter().cloned());
    PriorityUpdate::Extended { list, appended }
}

/// Read-merge-write union of a persisted list and an in-memory one.
///
/// The persisted order wins; in-memory ids it lacks are appended in their
/// in-memory order. Two writers appending disjoint ids therefore both
/// survive regardless of which one lands last.
pub fn merge_priority(persisted: &PriorityList, in_memory: &PriorityList) -> PriorityList {
    let mut merged = persisted.clone();
    for id in in_memory.as_slice() {
        if !merged.contains(id) {
            merged.0.push(id.clone());
        }
    }
    merged
}
