use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::event::{parse_date, parse_time, TIME_FORMAT};
use crate::models::{Instructor, LessonType, PaymentMethod, Session, UpcomingLesson};
use crate::screens::tee_time::{payment_options, PaymentOption};
use crate::screens::{filled, require_member};
use crate::services::{BookingConfirmation, BookingDraft, LessonDraft};
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonTypeOption {
    pub id: LessonType,
    pub name: &'static str,
    pub description: &'static str,
    pub discounted: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonOptions {
    pub lesson_types: Vec<LessonTypeOption>,
    pub instructors: Vec<Instructor>,
    pub times: Vec<String>,
    pub group_discount_percent: u32,
    pub payment_methods: Vec<PaymentOption>,
    pub currency: String,
    pub upcoming: Vec<UpcomingLesson>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonForm {
    pub lesson_type: Option<LessonType>,
    pub instructor: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub payment_method: PaymentMethod,
}

pub fn options(state: &AppState, session: &Session) -> Result<LessonOptions> {
    require_member(session)?;
    Ok(LessonOptions {
        lesson_types: LessonType::ALL
            .into_iter()
            .map(|id| LessonTypeOption {
                id,
                name: id.name(),
                description: id.description(),
                discounted: id.is_discounted(),
            })
            .collect(),
        instructors: state.options.instructors.clone(),
        times: state
            .options
            .lesson_times
            .iter()
            .map(|t| t.format(TIME_FORMAT).to_string())
            .collect(),
        group_discount_percent: state.options.group_discount_percent,
        payment_methods: payment_options(),
        currency: state.options.currency.clone(),
        upcoming: state.upcoming_lessons.clone(),
    })
}

pub fn submit(
    state: &AppState,
    session: &Session,
    form: LessonForm,
    today: NaiveDate,
) -> Result<BookingConfirmation> {
    require_member(session)?;
    let options = &state.options;
    let mut draft = LessonDraft::new(options);

    if let Some(kind) = form.lesson_type {
        draft.select_lesson_type(kind);
    }
    if let Some(instructor) = filled(&form.instructor) {
        draft.select_instructor(options, instructor)?;
    }
    if let Some(date) = filled(&form.date) {
        draft.select_date(parse_date(date)?, today)?;
    }
    if let Some(time) = filled(&form.time) {
        draft.select_time(options, parse_time(time)?)?;
    }
    draft.notes = form.notes;
    draft.payment_method = form.payment_method;

    draft.submit()
}
