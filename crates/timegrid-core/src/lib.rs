//! # Timegrid Core Library
//!
//! This library provides the timetable rendering core of a student
//! companion app: given a week of class slots it computes where every slot
//! goes on a calendar grid. It follows a CLI-first philosophy where every
//! operation is available through the standalone `timegrid` binary, with
//! any graphical front end being a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Catalog**: distinct courses of a week
//! - **Priority**: persisted, append-only course order used to break ties
//! - **Overlap**: clustering of intersecting slots and greedy column packing
//! - **Layout**: projection to boxes for week or day view, via the pure
//!   [`layout()`] entry point
//! - **Storage**: TOML configuration and background persistence of deltas
//!
//! ## Key Components
//!
//! - [`layout()`]: `(week, config, view) -> RenderModel`
//! - [`TimetableConfig`]: overlap switch and priority list
//! - [`ConfigStore`]: read-merge-write persistence contract
//! - [`TimetableSession`]: keeps the in-memory configuration across passes

pub mod catalog;
pub mod error;
pub mod layout;
pub mod marks;
pub mod overlap;
pub mod priority;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod warning;

pub use catalog::CourseCatalog;
pub use error::{ConfigError, CoreError, ValidationError};
pub use layout::{layout, DayLayout, Geometry, LayoutOptions, PlacedSlot, RenderModel, ViewMode};
pub use marks::{average_mark, Mark};
pub use overlap::{group_overlaps, resolve_day, ColumnAssignment, DayResolution, OverlapGroup};
pub use priority::{extend_priority, merge_priority, PriorityFlags, PriorityList, PriorityUpdate};
pub use schedule::{load_week, CourseId, Day, Professor, Slot, SlotDetails, Week};
pub use session::{FlushReport, TimetableSession};
pub use storage::{
    ConfigDelta, ConfigStore, FileConfigStore, MemoryConfigStore, PendingWrite, PrioritySync,
    SyncOutcome, TimetableConfig,
};
pub use warning::LayoutWarning;
