use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Tournament,
    #[serde(rename = "Special Event")]
    SpecialEvent,
    Lesson,
}

impl EventType {
    pub fn label(self) -> &'static str {
        match self {
            EventType::Tournament => "Tournament",
            EventType::SpecialEvent => "Special Event",
            EventType::Lesson => "Lesson",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Active,
    Full,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    pub max_participants: u32,
    pub current_participants: u32,
    pub cancelled: bool,
}

impl Event {
    /// Cancellation wins; otherwise the status follows the participant counts.
    pub fn status(&self) -> EventStatus {
        if self.cancelled {
            EventStatus::Cancelled
        } else if self.current_participants >= self.max_participants {
            EventStatus::Full
        } else {
            EventStatus::Active
        }
    }
}

/// Create form as typed by the admin. Everything arrives as text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[validate(custom(function = "crate::models::not_blank"))]
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub date: String,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub time: String,
    #[serde(default)]
    pub sponsor: String,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub max_participants: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub instructor: String,
}

impl EventDraft {
    /// Turns a validated draft into a fresh catalog entry with no participants.
    pub fn into_event(self, id: String) -> Result<Event> {
        self.validate()?;

        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        let max_participants = parse_count("maxParticipants", &self.max_participants)?;
        if max_participants == 0 {
            return Err(AppError::validation("maxParticipants must be greater than 0"));
        }
        let price = non_empty(self.price)
            .map(|p| parse_count("price", &p))
            .transpose()?;

        Ok(Event {
            id,
            name: self.name.trim().to_string(),
            event_type: self.event_type.unwrap_or(EventType::Tournament),
            date,
            time,
            sponsor: non_empty(self.sponsor),
            instructor: non_empty(self.instructor),
            price,
            max_participants,
            current_participants: 0,
            cancelled: false,
        })
    }
}

/// Edit form: only the provided fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[validate(custom(function = "crate::models::not_blank"))]
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub sponsor: Option<String>,
    pub instructor: Option<String>,
    pub price: Option<u32>,
    #[validate(range(min = 1))]
    pub max_participants: Option<u32>,
}

impl EventUpdate {
    pub fn apply(self, event: &mut Event) {
        if let Some(name) = self.name {
            event.name = name;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(sponsor) = self.sponsor {
            event.sponsor = non_empty(sponsor);
        }
        if let Some(instructor) = self.instructor {
            event.instructor = non_empty(instructor);
        }
        if let Some(price) = self.price {
            event.price = Some(price);
        }
        if let Some(max) = self.max_participants {
            event.max_participants = max;
        }
    }
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| AppError::validation(format!("date must be YYYY-MM-DD, got {value:?}")))
}

pub(crate) fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| AppError::validation(format!("time must be HH:MM, got {value:?}")))
}

fn parse_count(field: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("{field} must be a whole number, got {value:?}")))
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EventDraft {
        EventDraft {
            name: "Autumn Scramble".to_string(),
            event_type: Some(EventType::SpecialEvent),
            date: "2024-10-05".to_string(),
            time: "09:30".to_string(),
            sponsor: "  ".to_string(),
            max_participants: "40".to_string(),
            price: String::new(),
            instructor: String::new(),
        }
    }

    #[test]
    fn draft_becomes_active_event() {
        let event = draft().into_event("e1".to_string()).unwrap();
        assert_eq!(event.current_participants, 0);
        assert_eq!(event.status(), EventStatus::Active);
        assert_eq!(event.sponsor, None);
        assert_eq!(event.price, None);
        assert_eq!(event.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn missing_name_is_a_validation_error() {
        let mut d = draft();
        d.name.clear();
        let err = d.into_event("e1".to_string()).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("name"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut d = draft();
        d.name = "   ".to_string();
        match d.into_event("e1".to_string()).unwrap_err() {
            AppError::Validation(msg) => assert!(msg.contains("name"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }

        let mut d = draft();
        d.max_participants = " ".to_string();
        assert!(matches!(d.into_event("e1".to_string()), Err(AppError::Validation(_))));
    }

    #[test]
    fn blank_rename_is_rejected() {
        let changes = EventUpdate {
            name: Some("\t ".to_string()),
            ..EventUpdate::default()
        };
        assert!(changes.validate().is_err());
    }

    #[test]
    fn malformed_capacity_is_rejected() {
        let mut d = draft();
        d.max_participants = "forty".to_string();
        assert!(matches!(d.into_event("e1".to_string()), Err(AppError::Validation(_))));

        let mut d = draft();
        d.max_participants = "0".to_string();
        assert!(matches!(d.into_event("e1".to_string()), Err(AppError::Validation(_))));
    }

    #[test]
    fn status_follows_counts_unless_cancelled() {
        let mut event = draft().into_event("e1".to_string()).unwrap();
        event.current_participants = 40;
        assert_eq!(event.status(), EventStatus::Full);
        event.cancelled = true;
        assert_eq!(event.status(), EventStatus::Cancelled);
    }

    #[test]
    fn wire_type_uses_display_names() {
        let json = serde_json::to_value(EventType::SpecialEvent).unwrap();
        assert_eq!(json, "Special Event");
    }
}
