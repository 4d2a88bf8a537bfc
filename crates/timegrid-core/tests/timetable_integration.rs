//! Integration tests for the layout pipeline.
//!
//! These tests drive a week through catalog extraction, priority growth,
//! overlap resolution and projection, and check the persisted priority
//! list afterwards.

use std::sync::Arc;

use tempfile::TempDir;

use timegrid_core::{
    layout, ConfigDelta, ConfigStore, CourseCatalog, FileConfigStore, LayoutOptions,
    LayoutWarning, PriorityList, Slot, TimetableConfig, TimetableSession, ViewMode,
};

fn slot(course: &str, date: &str, start: &str, end: &str) -> Slot {
    let json = format!(
        r#"{{
            "course_name": "{course}",
            "room": "Aula 5",
            "type": "Lezione",
            "start_time": "{date}T{start}:00+01:00",
            "end_time": "{date}T{end}:00+01:00",
            "professor": {{ "name": "Luca", "surname": "Neri" }}
        }}"#
    );
    serde_json::from_str(&json).unwrap()
}

/// Sunday..Saturday of 2024-03-03, with Monday holding the classic example.
fn example_week() -> Vec<Vec<Slot>> {
    let mut week = vec![Vec::new(); 7];
    week[1] = vec![
        slot("A", "2024-03-04", "09:00", "10:00"),
        slot("B", "2024-03-04", "09:30", "10:30"),
        slot("C", "2024-03-04", "11:00", "12:00"),
    ];
    week[3] = vec![slot("D", "2024-03-06", "14:00", "16:00")];
    week
}

fn options() -> LayoutOptions {
    LayoutOptions {
        available_width: 532.0,
        row_height: 40.0,
        margin: 32.0,
        day_start_minutes: 8 * 60,
        row_minutes: 60,
    }
}

fn columns(model: &timegrid_core::RenderModel, position: usize) -> Vec<(String, usize, usize)> {
    model.days[position]
        .slots
        .iter()
        .map(|p| {
            (
                p.slot.course_name.clone(),
                p.assignment.column,
                p.assignment.total_columns,
            )
        })
        .collect()
}

#[test]
fn priority_breaks_overlap_ties() {
    let config = TimetableConfig {
        timetable_overlap: true,
        timetable_priority: Some(vec!["B".to_string(), "A".to_string()]),
    };
    let model = layout(&example_week(), &config, ViewMode::Week, &options());

    assert_eq!(
        columns(&model, 0),
        vec![
            ("A".to_string(), 1, 2),
            ("B".to_string(), 0, 2),
            ("C".to_string(), 0, 1),
        ]
    );

    let a = &model.days[0].slots[0].geometry;
    let b = &model.days[0].slots[1].geometry;
    assert_eq!(b.x, 32.0);
    assert_eq!(b.width, 50.0);
    assert_eq!(a.x, 82.0);
    assert!(b.right() <= a.x);

    // C and D were unknown and get appended in lexicographic order.
    match model.config_delta {
        Some(ConfigDelta::TimetablePriority(list)) => {
            assert_eq!(list.as_slice(), ["B", "A", "C", "D"]);
        }
        None => panic!("expected priority growth"),
    }
}

#[test]
fn disabled_overlap_stacks_slots() {
    let config = TimetableConfig {
        timetable_overlap: false,
        timetable_priority: Some(vec!["B".to_string(), "A".to_string()]),
    };
    let model = layout(&example_week(), &config, ViewMode::Week, &options());

    for (_, column, total) in columns(&model, 0) {
        assert_eq!((column, total), (0, 1));
    }
    assert!(model.config_delta.is_none());
}

#[test]
fn catalog_growth_appends_after_known_entries() {
    let week = vec![vec![
        slot("Z", "2024-03-04", "08:00", "09:00"),
        slot("X", "2024-03-04", "10:00", "11:00"),
        slot("Y", "2024-03-04", "12:00", "13:00"),
    ]];
    let catalog = CourseCatalog::from_week(&week);
    assert_eq!(catalog.iter().collect::<Vec<_>>(), ["X", "Y", "Z"]);

    let config = TimetableConfig {
        timetable_overlap: true,
        timetable_priority: Some(vec!["Y".to_string()]),
    };
    let model = layout(&week, &config, ViewMode::Day { selected: 1 }, &options());
    assert_eq!(
        model.config_delta,
        Some(ConfigDelta::TimetablePriority(PriorityList::new(
            ["Y", "X", "Z"].map(String::from)
        )))
    );
}

#[test]
fn day_view_uses_whole_width_and_sees_whole_week_catalog() {
    let config = TimetableConfig {
        timetable_overlap: true,
        timetable_priority: Some(Vec::new()),
    };
    // Wednesday only, but Monday's courses still enter the priority list.
    let model = layout(&example_week(), &config, ViewMode::Day { selected: 3 }, &options());

    assert_eq!(model.days.len(), 1);
    assert_eq!(model.days[0].day, 3);
    let d = &model.days[0].slots[0].geometry;
    assert_eq!((d.x, d.width), (32.0, 500.0));
    assert_eq!((d.y, d.height), (240.0, 80.0));

    match model.config_delta {
        Some(ConfigDelta::TimetablePriority(list)) => assert_eq!(list.len(), 4),
        None => panic!("expected priority growth"),
    }
}

#[test]
fn malformed_slots_do_not_disturb_the_rest() {
    let mut week = example_week();
    week[1].push(slot("E", "2024-03-04", "12:00", "11:00"));
    let model = layout(&week, &TimetableConfig::default(), ViewMode::Week, &options());

    assert_eq!(model.days[0].slots.len(), 3);
    assert!(model
        .warnings
        .iter()
        .any(|w| matches!(w, LayoutWarning::MalformedSlot { course, .. } if course == "E")));
    // The malformed course is still part of the catalog.
    match model.config_delta {
        Some(ConfigDelta::TimetablePriority(list)) => assert!(list.contains("E")),
        None => panic!("expected priority growth"),
    }
}

#[tokio::test]
async fn session_persists_through_file_store() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileConfigStore::new(dir.path().join("config.toml")));
    store
        .save(&TimetableConfig {
            timetable_overlap: true,
            timetable_priority: Some(vec!["B".to_string()]),
        })
        .unwrap();

    let mut session = TimetableSession::open(store.clone());
    let model = session.refresh(&example_week(), ViewMode::Week, &options());
    assert!(model.config_delta.is_some());
    assert_eq!(session.flush().await.stored, 1);

    let stored = store.load().unwrap().priority_list();
    assert_eq!(stored.as_slice(), ["B", "A", "C", "D"]);

    // A fresh session over the same file has nothing left to add.
    let mut reopened = TimetableSession::open(store);
    let model = reopened.refresh(&example_week(), ViewMode::Week, &options());
    assert!(model.config_delta.is_none());
}
