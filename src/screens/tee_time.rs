use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::event::{parse_date, parse_time, TIME_FORMAT};
use crate::models::{Course, MatchVisibility, PaymentMethod, Session, UpcomingTeeTime};
use crate::screens::{filled, require_member};
use crate::services::booking::MAX_PLAYERS_PER_TEE_TIME;
use crate::services::{BookingConfirmation, BookingDraft, TeeTimeDraft};
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    pub id: PaymentMethod,
    pub name: &'static str,
    pub description: &'static str,
}

pub(crate) fn payment_options() -> Vec<PaymentOption> {
    PaymentMethod::ALL
        .into_iter()
        .map(|id| PaymentOption {
            id,
            name: id.name(),
            description: id.description(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeTimeOptions {
    pub courses: Vec<Course>,
    pub times: Vec<String>,
    pub max_players: u32,
    pub payment_methods: Vec<PaymentOption>,
    pub currency: String,
    pub upcoming: Vec<UpcomingTeeTime>,
}

/// Raw form values; blank strings count as not filled in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeeTimeForm {
    pub date: String,
    pub time: String,
    pub course: String,
    pub visibility: MatchVisibility,
    pub players: Option<u32>,
    pub notes: String,
    pub payment_method: PaymentMethod,
}

pub fn options(state: &AppState, session: &Session) -> Result<TeeTimeOptions> {
    require_member(session)?;
    Ok(TeeTimeOptions {
        courses: state.options.courses.clone(),
        times: state
            .options
            .tee_times
            .iter()
            .map(|t| t.format(TIME_FORMAT).to_string())
            .collect(),
        max_players: MAX_PLAYERS_PER_TEE_TIME,
        payment_methods: payment_options(),
        currency: state.options.currency.clone(),
        upcoming: state.upcoming_tee_times.clone(),
    })
}

/// Builds the draft from the form and confirms it. `today` bounds the date picker.
pub fn submit(
    state: &AppState,
    session: &Session,
    form: TeeTimeForm,
    today: NaiveDate,
) -> Result<BookingConfirmation> {
    require_member(session)?;
    let options = &state.options;
    let mut draft = TeeTimeDraft::new(options);

    if let Some(date) = filled(&form.date) {
        draft.select_date(parse_date(date)?, today)?;
    }
    if let Some(time) = filled(&form.time) {
        draft.select_time(options, parse_time(time)?)?;
    }
    if let Some(course) = filled(&form.course) {
        draft.select_course(options, course)?;
    }
    if let Some(players) = form.players {
        draft.set_players(players)?;
    }
    draft.visibility = form.visibility;
    draft.notes = form.notes;
    draft.payment_method = form.payment_method;

    draft.submit()
}
