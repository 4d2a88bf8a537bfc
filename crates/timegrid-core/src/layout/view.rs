//! Which days of the week are on screen.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Week view shows every visible day side by side; day view shows one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewMode {
    Week,
    /// `selected` is 1-based within the visible days (Monday = 1).
    Day { selected: usize },
}

/// Week indices shown in week view.
///
/// A full week starts on Sunday; only Monday to Friday are shown. A
/// single-day week is shown as is.
pub fn visible_days(week_len: usize) -> Range<usize> {
    if week_len == 1 {
        0..1
    } else {
        week_len.min(1)..week_len.min(6)
    }
}

/// Week indices to lay out for `view`, or `None` if the day selection
/// falls outside the visible days.
pub fn shown_days(week_len: usize, view: ViewMode) -> Option<Vec<usize>> {
    let visible = visible_days(week_len);
    match view {
        ViewMode::Week => Some(visible.collect()),
        ViewMode::Day { selected } => selected
            .checked_sub(1)
            .and_then(|offset| visible.clone().nth(offset))
            .map(|day| vec![day]),
    }
}
