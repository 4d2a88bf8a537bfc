//! Property tests for overlap resolution and priority maintenance.

use chrono::{DateTime, Duration};
use proptest::prelude::*;

use timegrid_core::{
    extend_priority, group_overlaps, resolve_day, CourseCatalog, PriorityFlags, PriorityList,
    Professor, Slot,
};

const COURSES: [&str; 5] = ["Analisi", "Chimica", "Fisica", "Geometria", "Informatica"];

fn slot(course: &str, start_minute: i64, length: i64) -> Slot {
    let midnight = DateTime::parse_from_rfc3339("2024-03-04T00:00:00+01:00").unwrap();
    Slot {
        course_name: course.to_string(),
        room: "1P".to_string(),
        kind: "Lezione".to_string(),
        start_time: midnight + Duration::minutes(start_minute),
        end_time: midnight + Duration::minutes(start_minute + length),
        professor: Professor {
            name: "Anna".to_string(),
            surname: "Verdi".to_string(),
        },
    }
}

fn day_strategy() -> impl Strategy<Value = Vec<Slot>> {
    prop::collection::vec((0usize..COURSES.len(), 480i64..1140, 15i64..240), 0..14).prop_map(
        |specs| {
            specs
                .into_iter()
                .map(|(course, start, length)| slot(COURSES[course], start, length))
                .collect()
        },
    )
}

fn priority_strategy() -> impl Strategy<Value = PriorityList> {
    Just(COURSES.to_vec())
        .prop_shuffle()
        .prop_flat_map(|ids| (Just(ids), 0..=COURSES.len()))
        .prop_map(|(ids, keep)| PriorityList::new(ids[..keep].iter().map(|id| id.to_string())))
}

proptest! {
    #[test]
    fn disabled_overlap_is_always_full_width(day in day_strategy(), priority in priority_strategy()) {
        let resolution = resolve_day(&day, Some(&priority), false);
        for assignment in resolution.assignments {
            let assignment = assignment.unwrap();
            prop_assert_eq!(assignment.column, 0);
            prop_assert_eq!(assignment.total_columns, 1);
        }
    }

    #[test]
    fn slots_sharing_a_column_never_intersect(day in day_strategy(), priority in priority_strategy()) {
        let resolution = resolve_day(&day, Some(&priority), true);
        for group in group_overlaps(&day) {
            for (i, &a) in group.members.iter().enumerate() {
                for &b in &group.members[i + 1..] {
                    let (ca, cb) = (resolution.assignments[a].unwrap(), resolution.assignments[b].unwrap());
                    if ca.column == cb.column {
                        prop_assert!(!day[a].overlaps(&day[b]), "{:?} and {:?} share column {}", day[a], day[b], ca.column);
                    }
                }
            }
        }
    }

    #[test]
    fn total_columns_is_group_width(day in day_strategy(), priority in priority_strategy()) {
        let resolution = resolve_day(&day, Some(&priority), true);
        let groups = group_overlaps(&day);
        let grouped: usize = groups.iter().map(|g| g.members.len()).sum();
        prop_assert_eq!(grouped, day.len());

        for group in groups {
            let max_column = group
                .members
                .iter()
                .map(|&i| resolution.assignments[i].unwrap().column)
                .max()
                .unwrap();
            for &i in &group.members {
                let assignment = resolution.assignments[i].unwrap();
                prop_assert_eq!(assignment.total_columns, max_column + 1);
                prop_assert!(assignment.column < assignment.total_columns);
            }
            if group.members.len() == 1 {
                prop_assert_eq!(resolution.assignments[group.members[0]].unwrap().total_columns, 1);
            }
        }
    }

    #[test]
    fn groups_do_not_touch_each_other(day in day_strategy()) {
        let groups = group_overlaps(&day);
        for (i, g) in groups.iter().enumerate() {
            for h in &groups[i + 1..] {
                for &a in &g.members {
                    for &b in &h.members {
                        prop_assert!(!day[a].overlaps(&day[b]));
                    }
                }
            }
        }
    }

    #[test]
    fn top_ranked_course_takes_column_zero(day in day_strategy(), priority in priority_strategy()) {
        let resolution = resolve_day(&day, Some(&priority), true);
        for group in group_overlaps(&day) {
            // The earliest slot of the best-ranked course present is placed first.
            let best = group
                .members
                .iter()
                .copied()
                .min_by_key(|&i| {
                    let rank = priority.rank(&day[i].course_name);
                    (rank.is_none(), rank, day[i].start_time, i)
                })
                .unwrap();
            prop_assert_eq!(resolution.assignments[best].unwrap().column, 0);
        }
    }

    #[test]
    fn priority_extension_is_idempotent_and_monotone(
        day in day_strategy(),
        priority in priority_strategy(),
        overlap_enabled in any::<bool>(),
        priority_enabled in any::<bool>(),
    ) {
        let catalog = CourseCatalog::from_week(&[day]);
        let flags = PriorityFlags { overlap_enabled, priority_enabled };

        let once = extend_priority(&priority, &catalog, flags).resolve(priority.clone());
        prop_assert!(once.len() >= priority.len());
        prop_assert_eq!(&once.as_slice()[..priority.len()], priority.as_slice());

        let again = extend_priority(&once, &catalog, flags);
        prop_assert!(!again.is_changed());

        if overlap_enabled && priority_enabled {
            for course in catalog.iter() {
                prop_assert!(once.contains(course));
            }
        } else {
            prop_assert_eq!(once, priority);
        }
    }
}
