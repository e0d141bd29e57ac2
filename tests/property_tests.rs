use golf_club::models::{EventDraft, EventType};
use golf_club::seed;
use golf_club::services::{CatalogTab, EventCatalog, TournamentRegistry};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Register(usize),
    Withdraw(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3).prop_map(Op::Register),
        (0usize..3).prop_map(Op::Withdraw),
    ]
}

fn event_type() -> impl Strategy<Value = EventType> {
    prop_oneof![
        Just(EventType::Tournament),
        Just(EventType::SpecialEvent),
        Just(EventType::Lesson),
    ]
}

proptest! {
    #[test]
    fn counts_track_registrations(ops in prop::collection::vec(op(), 0..40)) {
        let mut registry = TournamentRegistry::new(seed::tournaments());
        let ids = ["1", "2", "3"];
        let base: Vec<u32> = registry.tournaments().iter().map(|t| t.players).collect();
        let base_registered: Vec<bool> = registry.tournaments().iter().map(|t| t.registered).collect();

        for op in ops {
            let _ = match op {
                Op::Register(i) => registry.register(ids[i]),
                Op::Withdraw(i) => registry.withdraw(ids[i]),
            };
        }

        let schedule: Vec<String> = registry.schedule().iter().map(|t| t.id.clone()).collect();
        for (i, t) in registry.tournaments().iter().enumerate() {
            let delta = i64::from(t.registered) - i64::from(base_registered[i]);
            prop_assert_eq!(i64::from(t.players), i64::from(base[i]) + delta);
            prop_assert!(t.players <= t.max_players);
            prop_assert_eq!(schedule.contains(&t.id), t.registered);
        }
        let mut unique = schedule.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), schedule.len());
    }

    #[test]
    fn failed_create_leaves_catalog_alone(name in "[A-Za-z ]{0,12}", max in "[0-9]{0,3}") {
        let mut catalog = EventCatalog::new(seed::events());
        let before = catalog.len();
        let draft = EventDraft {
            name: name.clone(),
            date: "2024-08-01".to_string(),
            time: "09:30".to_string(),
            max_participants: max,
            ..EventDraft::default()
        };
        match catalog.create(draft) {
            Ok(_) => {
                prop_assert!(!name.trim().is_empty());
                prop_assert_eq!(catalog.len(), before + 1);
            }
            Err(_) => prop_assert_eq!(catalog.len(), before),
        }
    }

    #[test]
    fn tab_filter_keeps_catalog_order(types in prop::collection::vec(event_type(), 0..20)) {
        let mut catalog = EventCatalog::default();
        for (i, kind) in types.iter().enumerate() {
            let draft = EventDraft {
                name: format!("Entry {i}"),
                event_type: Some(*kind),
                date: "2024-08-01".to_string(),
                time: "09:30".to_string(),
                max_participants: "10".to_string(),
                ..EventDraft::default()
            };
            catalog.create(draft).unwrap();
        }

        for tab in [CatalogTab::Events, CatalogTab::Lessons, CatalogTab::TeeTimes] {
            let filtered: Vec<&str> = catalog.filter_by_tab(tab).iter().map(|e| e.name.as_str()).collect();
            let expected: Vec<&str> = catalog
                .events()
                .iter()
                .filter(|e| tab.includes(e.event_type))
                .map(|e| e.name.as_str())
                .collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
