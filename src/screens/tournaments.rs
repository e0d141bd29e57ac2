use serde::Serialize;

use crate::error::Result;
use crate::models::{RegistrationState, Session, Tournament};
use crate::screens::{display_date, display_time, require_member, IdRequest, Message};
use crate::AppState;

/// A tournament as the list shows it, with the derived capacity fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCard {
    #[serde(flatten)]
    pub tournament: Tournament,
    pub full: bool,
    pub state: RegistrationState,
    pub places_left: u32,
    pub display_date: String,
    pub display_time: String,
    /// Button label, or `None` when there is nothing to press.
    pub action: Option<&'static str>,
}

impl From<&Tournament> for TournamentCard {
    fn from(t: &Tournament) -> Self {
        let state = t.state();
        let action = match state {
            RegistrationState::Open => Some("Register"),
            RegistrationState::Registered => Some("Withdraw"),
            RegistrationState::Full => None,
        };
        TournamentCard {
            tournament: t.clone(),
            full: t.is_full(),
            state,
            places_left: t.places_left(),
            display_date: display_date(t.date),
            display_time: display_time(t.time),
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub players: u32,
    pub max_players: u32,
}

impl From<&Tournament> for ScheduleEntry {
    fn from(t: &Tournament) -> Self {
        ScheduleEntry {
            id: t.id.clone(),
            name: t.name.clone(),
            date: display_date(t.date),
            time: display_time(t.time),
            players: t.players,
            max_players: t.max_players,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentsView {
    pub tournaments: Vec<TournamentCard>,
    pub schedule: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantsView {
    pub tournament: String,
    pub participants: Vec<String>,
}

pub fn list(state: &AppState, session: &Session) -> Result<TournamentsView> {
    require_member(session)?;
    Ok(TournamentsView {
        tournaments: state.tournaments.tournaments().iter().map(TournamentCard::from).collect(),
        schedule: state.tournaments.schedule().into_iter().map(ScheduleEntry::from).collect(),
    })
}

pub fn register(
    state: &mut AppState,
    session: &Session,
    req: IdRequest,
) -> Result<Message<TournamentCard>> {
    require_member(session)?;
    let tournament = state.tournaments.register(&req.id)?;
    Ok(Message::new(
        format!("You are registered for {}", tournament.name),
        TournamentCard::from(tournament),
    ))
}

pub fn withdraw(
    state: &mut AppState,
    session: &Session,
    req: IdRequest,
) -> Result<Message<TournamentCard>> {
    require_member(session)?;
    let tournament = state.tournaments.withdraw(&req.id)?;
    Ok(Message::new(
        format!("You have withdrawn from {}", tournament.name),
        TournamentCard::from(tournament),
    ))
}

pub fn participants(state: &AppState, session: &Session, req: IdRequest) -> Result<ParticipantsView> {
    require_member(session)?;
    let name = state.tournaments.get(&req.id)?.name.clone();
    Ok(ParticipantsView {
        tournament: name,
        participants: state.tournaments.view_participants(&req.id)?.to_vec(),
    })
}
