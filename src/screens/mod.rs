//! Screen handlers. Each takes the shared state, the caller's session and a
//! request DTO, and returns a serializable response.

#[cfg(feature = "analytics")]
pub mod analytics;
pub mod events;
pub mod home;
pub mod lesson;
pub mod profile;
pub mod tee_time;
pub mod tournaments;
pub mod users;
pub mod welcome;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::models::Session;
use crate::AppState;

const DISPLAY_DATE: &str = "%B %-d, %Y";
const DISPLAY_TIME: &str = "%I:%M %p";

#[derive(Debug, Clone, Deserialize)]
pub struct IdRequest {
    pub id: String,
}

/// Destructive actions carry the user's answer to the confirmation dialog.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmRequest {
    pub id: String,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message<T> {
    pub message: String,
    pub data: T,
}

impl<T> Message<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

pub(crate) fn require_member(session: &Session) -> Result<()> {
    session
        .require_member()
        .inspect_err(|_| warn!("member screen refused for {:?} session", session.role))
}

/// Admin screens need an admin session and the admin panel switched on.
pub(crate) fn require_admin(state: &AppState, session: &Session) -> Result<()> {
    session
        .require_admin()
        .inspect_err(|_| warn!("admin screen refused for {:?} session", session.role))?;
    if !state.config.features.enable_admin {
        return Err(AppError::FeatureDisabled("admin"));
    }
    Ok(())
}

pub(crate) fn confirm(
    confirmed: bool,
    title: &'static str,
    message: &'static str,
) -> Result<()> {
    if confirmed {
        Ok(())
    } else {
        Err(AppError::ConfirmationRequired { title, message })
    }
}

/// "June 15, 2024"
pub(crate) fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE).to_string()
}

/// "08:00 AM"
pub(crate) fn display_time(time: NaiveTime) -> String {
    time.format(DISPLAY_TIME).to_string()
}

/// Treats a blank form field as not filled in.
pub(crate) fn filled(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(display_date(date), "June 5, 2024");
        assert_eq!(display_time(time), "02:30 PM");
    }

    #[test]
    fn blank_fields_are_not_filled() {
        assert_eq!(filled("  "), None);
        assert_eq!(filled(" main "), Some("main"));
    }

    #[test]
    fn unconfirmed_action_is_refused() {
        assert!(matches!(
            confirm(false, "Delete Event", "Are you sure?"),
            Err(AppError::ConfirmationRequired { title: "Delete Event", .. })
        ));
        assert!(confirm(true, "Delete Event", "Are you sure?").is_ok());
    }
}
