//! booking.rs
//!
//! Draft forms for booking a tee time or a lesson.
//!
//! A draft collects a partial selection. Each selector checks its input
//! against the club's options and leaves the draft unchanged when the input
//! is rejected. `submit` only succeeds once every required field is filled.
//! It produces a confirmation summary. Nothing is stored anywhere.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::BookingConfig;
use crate::error::{AppError, Result, REQUIRED_FIELDS_MESSAGE};
use crate::models::{Course, Instructor, LessonType, MatchVisibility, PaymentMethod};
use crate::seed;

pub const MAX_PLAYERS_PER_TEE_TIME: u32 = 4;
const LONG_DATE: &str = "%A, %B %-d, %Y";
const SLOT_TIME: &str = "%H:%M";

/// Reference data the booking screens pick from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOptions {
    pub courses: Vec<Course>,
    pub instructors: Vec<Instructor>,
    pub tee_times: Vec<NaiveTime>,
    pub lesson_times: Vec<NaiveTime>,
    pub group_discount_percent: u32,
    pub currency: String,
}

impl BookingOptions {
    pub fn from_seed(config: &BookingConfig) -> Self {
        Self {
            courses: seed::courses(),
            instructors: seed::instructors(),
            tee_times: seed::tee_time_slots(),
            lesson_times: seed::lesson_time_slots(),
            group_discount_percent: config.group_discount_percent,
            currency: config.currency.clone(),
        }
    }

    pub fn course(&self, id: &str) -> Result<&Course> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::validation(format!("unknown course {id:?}")))
    }

    pub fn instructor(&self, id: &str) -> Result<&Instructor> {
        self.instructors
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::validation(format!("unknown instructor {id:?}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

impl SummaryLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub title: &'static str,
    pub message: String,
    pub summary: Vec<SummaryLine>,
    pub total: u32,
    pub currency: String,
    pub payment_method: PaymentMethod,
}

/// Shared shape of the tee-time and lesson forms.
pub trait BookingDraft {
    /// Required fields that are still empty, in form order.
    fn missing_fields(&self) -> Vec<&'static str>;

    fn price(&self) -> u32;

    /// The confirmation, or `None` while anything required is missing.
    fn confirmation(&self) -> Option<BookingConfirmation>;

    fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    fn submit(&self) -> Result<BookingConfirmation> {
        match self.confirmation() {
            Some(confirmation) => {
                info!("{}: {}", confirmation.title, confirmation.message);
                Ok(confirmation)
            }
            None => {
                let missing = self.missing_fields();
                warn!("booking submit rejected, missing {:?}", missing);
                Err(AppError::Validation(format!(
                    "{} ({})",
                    REQUIRED_FIELDS_MESSAGE,
                    missing.join(", ")
                )))
            }
        }
    }
}

fn check_date(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date < today {
        return Err(AppError::validation(format!("{date} is in the past")));
    }
    Ok(())
}

fn check_slot(slots: &[NaiveTime], time: NaiveTime) -> Result<()> {
    if !slots.contains(&time) {
        return Err(AppError::validation(format!(
            "{} is not a bookable time",
            time.format(SLOT_TIME)
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeeTimeDraft {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub course: Option<Course>,
    pub visibility: MatchVisibility,
    pub players: u32,
    pub notes: String,
    pub payment_method: PaymentMethod,
    currency: String,
}

impl TeeTimeDraft {
    /// Starts on the main course with one player and an open match.
    pub fn new(options: &BookingOptions) -> Self {
        Self {
            date: None,
            time: None,
            course: options.course("main").ok().cloned(),
            visibility: MatchVisibility::Open,
            players: 1,
            notes: String::new(),
            payment_method: PaymentMethod::default(),
            currency: options.currency.clone(),
        }
    }

    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<()> {
        check_date(date, today)?;
        self.date = Some(date);
        Ok(())
    }

    pub fn select_time(&mut self, options: &BookingOptions, time: NaiveTime) -> Result<()> {
        check_slot(&options.tee_times, time)?;
        self.time = Some(time);
        Ok(())
    }

    pub fn select_course(&mut self, options: &BookingOptions, id: &str) -> Result<()> {
        self.course = Some(options.course(id)?.clone());
        Ok(())
    }

    pub fn set_players(&mut self, players: u32) -> Result<()> {
        if !(1..=MAX_PLAYERS_PER_TEE_TIME).contains(&players) {
            return Err(AppError::validation(format!(
                "players must be between 1 and {MAX_PLAYERS_PER_TEE_TIME}"
            )));
        }
        self.players = players;
        Ok(())
    }
}

impl BookingDraft for TeeTimeDraft {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push("date");
        }
        if self.time.is_none() {
            missing.push("time");
        }
        if self.course.is_none() {
            missing.push("course");
        }
        missing
    }

    fn price(&self) -> u32 {
        self.course.as_ref().map_or(0, |c| c.price)
    }

    fn confirmation(&self) -> Option<BookingConfirmation> {
        let (Some(date), Some(time), Some(course)) = (self.date, self.time, self.course.as_ref())
        else {
            return None;
        };
        let long_date = date.format(LONG_DATE).to_string();
        let slot = time.format(SLOT_TIME).to_string();

        let mut summary = vec![
            SummaryLine::new("Course", course.name.clone()),
            SummaryLine::new("Date", long_date.clone()),
            SummaryLine::new("Time", slot.clone()),
            SummaryLine::new("Match", self.visibility.label()),
            SummaryLine::new("Players", self.players.to_string()),
        ];
        if !self.notes.trim().is_empty() {
            summary.push(SummaryLine::new("Notes", self.notes.trim()));
        }

        Some(BookingConfirmation {
            title: "Booking Confirmed!",
            message: format!("Your tee time has been booked for {long_date} at {slot}"),
            summary,
            total: self.price(),
            currency: self.currency.clone(),
            payment_method: self.payment_method,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonDraft {
    pub lesson_type: Option<LessonType>,
    pub instructor: Option<Instructor>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub notes: String,
    pub payment_method: PaymentMethod,
    discount_percent: u32,
    currency: String,
}

impl LessonDraft {
    pub fn new(options: &BookingOptions) -> Self {
        Self {
            lesson_type: None,
            instructor: None,
            date: None,
            time: None,
            notes: String::new(),
            payment_method: PaymentMethod::default(),
            discount_percent: options.group_discount_percent.min(100),
            currency: options.currency.clone(),
        }
    }

    pub fn select_lesson_type(&mut self, lesson_type: LessonType) {
        self.lesson_type = Some(lesson_type);
    }

    pub fn select_instructor(&mut self, options: &BookingOptions, id: &str) -> Result<()> {
        self.instructor = Some(options.instructor(id)?.clone());
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<()> {
        check_date(date, today)?;
        self.date = Some(date);
        Ok(())
    }

    pub fn select_time(&mut self, options: &BookingOptions, time: NaiveTime) -> Result<()> {
        check_slot(&options.lesson_times, time)?;
        self.time = Some(time);
        Ok(())
    }

    pub fn discount(&self) -> u32 {
        match (&self.instructor, self.lesson_type) {
            (Some(instructor), Some(kind)) if kind.is_discounted() => {
                instructor.rate - self.price()
            }
            _ => 0,
        }
    }
}

/// `rate * (100 - percent) / 100`, rounded half up.
pub fn discounted_rate(rate: u32, percent: u32) -> u32 {
    let kept = u64::from(100 - percent.min(100));
    ((u64::from(rate) * kept + 50) / 100) as u32
}

impl BookingDraft for LessonDraft {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.lesson_type.is_none() {
            missing.push("lessonType");
        }
        if self.instructor.is_none() {
            missing.push("instructor");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.time.is_none() {
            missing.push("time");
        }
        missing
    }

    /// Instructor's hourly rate; group lessons get the configured discount.
    fn price(&self) -> u32 {
        let Some(instructor) = &self.instructor else {
            return 0;
        };
        match self.lesson_type {
            Some(kind) if kind.is_discounted() => {
                discounted_rate(instructor.rate, self.discount_percent)
            }
            _ => instructor.rate,
        }
    }

    fn confirmation(&self) -> Option<BookingConfirmation> {
        let (Some(kind), Some(instructor), Some(date), Some(time)) =
            (self.lesson_type, self.instructor.as_ref(), self.date, self.time)
        else {
            return None;
        };
        let long_date = date.format(LONG_DATE).to_string();
        let slot = time.format(SLOT_TIME).to_string();

        let mut summary = vec![
            SummaryLine::new("Lesson", kind.name()),
            SummaryLine::new("Instructor", instructor.name.clone()),
            SummaryLine::new("Date", long_date.clone()),
            SummaryLine::new("Time", slot.clone()),
        ];
        if kind.is_discounted() {
            summary.push(SummaryLine::new(
                "Group discount",
                format!("-{} {}", self.discount(), self.currency),
            ));
        }
        if !self.notes.trim().is_empty() {
            summary.push(SummaryLine::new("Notes", self.notes.trim()));
        }

        Some(BookingConfirmation {
            title: "Lesson Booked!",
            message: format!(
                "Your {} with {} has been booked for {} at {}",
                kind.name().to_lowercase(),
                instructor.name,
                long_date,
                slot
            ),
            summary,
            total: self.price(),
            currency: self.currency.clone(),
            payment_method: self.payment_method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn options() -> BookingOptions {
        BookingOptions::from_seed(&Config::default().booking)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn group_lesson_with_top_instructor_costs_640() {
        let opts = options();
        let mut draft = LessonDraft::new(&opts);
        draft.select_instructor(&opts, "ahmed").unwrap();
        draft.select_lesson_type(LessonType::Group);
        assert_eq!(draft.price(), 640);
        assert_eq!(draft.discount(), 160);

        draft.select_lesson_type(LessonType::Private);
        assert_eq!(draft.price(), 800);
    }

    #[test]
    fn discount_rounds_half_up() {
        assert_eq!(discounted_rate(700, 20), 560);
        assert_eq!(discounted_rate(75, 20), 60);
        assert_eq!(discounted_rate(5, 50), 3);
        assert_eq!(discounted_rate(600, 0), 600);
        assert_eq!(discounted_rate(600, 150), 0);
    }

    #[test]
    fn lesson_without_instructor_is_free_and_incomplete() {
        let draft = LessonDraft::new(&options());
        assert_eq!(draft.price(), 0);
        assert!(!draft.is_complete());
        assert_eq!(
            draft.missing_fields(),
            vec!["lessonType", "instructor", "date", "time"]
        );
        match draft.submit() {
            Err(AppError::Validation(msg)) => assert!(msg.starts_with(REQUIRED_FIELDS_MESSAGE)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn complete_lesson_submits() {
        let opts = options();
        let mut draft = LessonDraft::new(&opts);
        draft.select_lesson_type(LessonType::Group);
        draft.select_instructor(&opts, "sarah").unwrap();
        draft.select_date(day(7), day(1)).unwrap();
        draft.select_time(&opts, at(10, 0)).unwrap();

        let confirmation = draft.submit().unwrap();
        assert_eq!(confirmation.total, 560);
        assert_eq!(confirmation.currency, "EGP");
        assert_eq!(
            confirmation.message,
            "Your group lesson with Sarah Mohamed has been booked for Saturday, June 7, 2025 at 10:00"
        );
        assert!(confirmation.summary.iter().any(|l| l.label == "Group discount"));
    }

    #[test]
    fn tee_time_defaults_to_main_course() {
        let opts = options();
        let draft = TeeTimeDraft::new(&opts);
        assert_eq!(draft.price(), 150);
        assert_eq!(draft.missing_fields(), vec!["date", "time"]);
    }

    #[test]
    fn tee_time_price_follows_course() {
        let opts = options();
        let mut draft = TeeTimeDraft::new(&opts);
        draft.select_course(&opts, "executive").unwrap();
        assert_eq!(draft.price(), 85);
        assert!(matches!(
            draft.select_course(&opts, "moon"),
            Err(AppError::Validation(_))
        ));
        assert_eq!(draft.price(), 85);
    }

    #[test]
    fn tee_time_selectors_reject_bad_input() {
        let opts = options();
        let mut draft = TeeTimeDraft::new(&opts);
        assert!(draft.select_date(day(1), day(2)).is_err());
        assert!(draft.select_time(&opts, at(5, 30)).is_err());
        assert!(draft.select_time(&opts, at(6, 15)).is_err());
        assert!(draft.set_players(0).is_err());
        assert!(draft.set_players(5).is_err());
        assert_eq!(draft, TeeTimeDraft::new(&opts));
    }

    #[test]
    fn complete_tee_time_submits() {
        let opts = options();
        let mut draft = TeeTimeDraft::new(&opts);
        draft.select_date(day(7), day(7)).unwrap();
        draft.select_time(&opts, at(8, 30)).unwrap();
        draft.set_players(3).unwrap();
        draft.payment_method = PaymentMethod::Cash;

        assert!(draft.is_complete());
        let confirmation = draft.submit().unwrap();
        assert_eq!(confirmation.total, 150);
        assert_eq!(confirmation.payment_method, PaymentMethod::Cash);
        assert_eq!(
            confirmation.message,
            "Your tee time has been booked for Saturday, June 7, 2025 at 08:30"
        );
    }
}
