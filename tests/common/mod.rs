#![allow(dead_code)]

use chrono::NaiveDate;
use golf_club::auth::LoginForm;
use golf_club::config::Config;
use golf_club::models::Session;
use golf_club::screens::welcome;
use golf_club::AppState;

/// Seeded state with a cheap bcrypt cost.
pub fn state() -> AppState {
    state_with(Config::default())
}

pub fn state_with(mut config: Config) -> AppState {
    config.auth.bcrypt_cost = 4;
    AppState::new(config).unwrap()
}

pub fn member(state: &AppState) -> Session {
    sign_in(state, "john.smith@email.com", "anything")
}

pub fn admin(state: &AppState) -> Session {
    sign_in(state, "admin@gmail.com", "admin123")
}

pub fn sign_in(state: &AppState, email: &str, password: &str) -> Session {
    welcome::sign_in(
        state,
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        },
    )
    .unwrap()
    .session
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}
