mod common;

use golf_club::error::AppError;
use golf_club::models::{RegistrationState, Role, Session};
use golf_club::screens::{home, tournaments, IdRequest};

fn id(value: &str) -> IdRequest {
    IdRequest {
        id: value.to_string(),
    }
}

#[test]
fn guest_cannot_open_tournaments() {
    let state = common::state();
    let err = tournaments::list(&state, &Session::guest()).unwrap_err();
    assert_eq!(err, AppError::Forbidden { required: Role::Member });
}

#[test]
fn list_shows_derived_capacity() {
    let state = common::state();
    let session = common::member(&state);
    let view = tournaments::list(&state, &session).unwrap();

    let states: Vec<_> = view.tournaments.iter().map(|c| c.state).collect();
    assert_eq!(
        states,
        vec![RegistrationState::Registered, RegistrationState::Open, RegistrationState::Full]
    );
    assert!(view.tournaments[2].full);
    assert_eq!(view.tournaments[2].action, None);
    assert_eq!(view.tournaments[1].action, Some("Register"));
    assert_eq!(view.schedule.len(), 1);
}

#[test]
fn register_then_withdraw_round_trip() {
    let mut state = common::state();
    let session = common::member(&state);

    let registered = tournaments::register(&mut state, &session, id("2")).unwrap();
    assert_eq!(registered.data.tournament.players, 66);
    assert_eq!(registered.data.state, RegistrationState::Registered);

    let dashboard = home::dashboard(&state, &session).unwrap();
    assert_eq!(dashboard.stats.tournament_entries, 2);

    let participants = tournaments::participants(&state, &session, id("2")).unwrap();
    assert!(participants.participants.contains(&"You".to_string()));

    let withdrawn = tournaments::withdraw(&mut state, &session, id("2")).unwrap();
    assert_eq!(withdrawn.data.tournament.players, 65);
    assert_eq!(withdrawn.data.state, RegistrationState::Open);

    let view = tournaments::list(&state, &session).unwrap();
    let ids: Vec<_> = view.schedule.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn full_tournament_rejects_and_keeps_count() {
    let mut state = common::state();
    let session = common::member(&state);
    let err = tournaments::register(&mut state, &session, id("3")).unwrap_err();
    assert!(matches!(err, AppError::CapacityExceeded { max: 64, .. }));

    let view = tournaments::list(&state, &session).unwrap();
    assert_eq!(view.tournaments[2].tournament.players, 64);
}

#[test]
fn double_register_and_stray_withdraw_are_rejected() {
    let mut state = common::state();
    let session = common::member(&state);
    assert_eq!(
        tournaments::register(&mut state, &session, id("1")).unwrap_err(),
        AppError::AlreadyRegistered("1".to_string())
    );
    assert_eq!(
        tournaments::withdraw(&mut state, &session, id("2")).unwrap_err(),
        AppError::NotRegistered("2".to_string())
    );
}

#[test]
fn card_serializes_flat_with_derived_fields() {
    let state = common::state();
    let session = common::member(&state);
    let view = tournaments::list(&state, &session).unwrap();
    let value = serde_json::to_value(&view.tournaments[0]).unwrap();
    assert_eq!(value["maxPlayers"], 120);
    assert_eq!(value["full"], false);
    assert_eq!(value["state"], "Registered");
    assert_eq!(value["date"], "2025-06-07");
    assert_eq!(value["displayDate"], "June 7, 2025");
}
