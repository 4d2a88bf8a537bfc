//! Exam marks and their average.
//!
//! The feed delivers two record shapes that share a few fields; they are
//! kept apart by an explicit `kind` tag rather than by probing which
//! fields happen to be present.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A recorded or pending exam result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mark {
    /// Registered in the career record.
    Permanent {
        name: String,
        date: DateTime<FixedOffset>,
        mark: Option<String>,
        num_credits: u32,
    },
    /// Published but not yet registered.
    Provisional {
        name: String,
        date: DateTime<FixedOffset>,
        mark: Option<String>,
        status: String,
        message: Option<String>,
    },
}

impl Mark {
    pub fn name(&self) -> &str {
        match self {
            Self::Permanent { name, .. } | Self::Provisional { name, .. } => name,
        }
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        match self {
            Self::Permanent { date, .. } | Self::Provisional { date, .. } => *date,
        }
    }

    pub fn grade(&self) -> Option<&str> {
        match self {
            Self::Permanent { mark, .. } | Self::Provisional { mark, .. } => mark.as_deref(),
        }
    }

    /// Leading integer of the grade ("30L" is 30). Zero, missing and
    /// non-numeric grades ("RT", "ASS") have no value.
    pub fn numeric_value(&self) -> Option<u32> {
        let grade = self.grade()?.trim_start();
        let end = grade
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(grade.len());
        grade[..end].parse::<u32>().ok().filter(|&value| value > 0)
    }

    /// Kind-specific (label, value) pairs for a mark card.
    pub fn detail_fields(&self) -> Vec<(&'static str, String)> {
        let date = self.date().format("%b %-d, %Y").to_string();
        match self {
            Self::Permanent { num_credits, .. } => {
                vec![("date", date), ("credits", format!("{num_credits} credits"))]
            }
            Self::Provisional { message, .. } => {
                vec![("date", date), ("message", message.clone().unwrap_or_default())]
            }
        }
    }
}

/// Mean of the numeric grades across `marks`, `None` if there are none.
pub fn average_mark(marks: &[Mark]) -> Option<f64> {
    let values: Vec<u32> = marks.iter().filter_map(Mark::numeric_value).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64)
}
