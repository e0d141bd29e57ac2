use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Label added to a tournament's participant list when the signed-in member registers.
pub const SELF_PARTICIPANT: &str = "You";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub sponsor: String,
    pub sponsor_type: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub format: String,
    pub entry_fee: u32,
    pub rules: String,
    pub description: String,
    pub players: u32,
    pub max_players: u32,
    pub registered: bool,
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationState {
    Open,
    Registered,
    Full,
}

impl Tournament {
    /// Capacity is read from the counts, never stored.
    pub fn is_full(&self) -> bool {
        self.players >= self.max_players
    }

    pub fn state(&self) -> RegistrationState {
        if self.registered {
            RegistrationState::Registered
        } else if self.is_full() {
            RegistrationState::Full
        } else {
            RegistrationState::Open
        }
    }

    pub fn places_left(&self) -> u32 {
        self.max_players.saturating_sub(self.players)
    }
}
