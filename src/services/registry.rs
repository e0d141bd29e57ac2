//! registry.rs
//!
//! Tournament registration for the signed-in member.
//!
//! Each tournament moves between three states: Open, Registered and Full.
//! Full is never stored; it is read from `players` and `maxPlayers`.
//! The personal schedule keeps tournament ids in registration order and
//! always resolves to the current records.

use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::models::tournament::SELF_PARTICIPANT;
use crate::models::Tournament;

#[derive(Debug, Clone, Default)]
pub struct TournamentRegistry {
    tournaments: Vec<Tournament>,
    schedule: Vec<String>,
}

impl TournamentRegistry {
    /// Seeds the registry; tournaments already flagged as registered start the schedule.
    pub fn new(tournaments: Vec<Tournament>) -> Self {
        let schedule = tournaments
            .iter()
            .filter(|t| t.registered)
            .map(|t| t.id.clone())
            .collect();
        Self {
            tournaments,
            schedule,
        }
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn get(&self, id: &str) -> Result<&Tournament> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found("tournament", id))
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.tournaments
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::not_found("tournament", id))
    }

    /// Open -> Registered. Fails without touching anything when the member is
    /// already registered or the field is full. Waitlists are not supported.
    pub fn register(&mut self, id: &str) -> Result<&Tournament> {
        let idx = self.position(id)?;
        let tournament = &mut self.tournaments[idx];

        if tournament.registered {
            warn!("register rejected: already registered for tournament {}", id);
            return Err(AppError::AlreadyRegistered(id.to_string()));
        }
        if tournament.is_full() {
            warn!(
                "register rejected: tournament {} is full ({}/{})",
                id, tournament.players, tournament.max_players
            );
            return Err(AppError::CapacityExceeded {
                id: id.to_string(),
                max: tournament.max_players,
            });
        }

        tournament.registered = true;
        tournament.players = tournament.players.saturating_add(1);
        if !tournament.participants.iter().any(|p| p == SELF_PARTICIPANT) {
            tournament.participants.push(SELF_PARTICIPANT.to_string());
        }
        info!(
            "Registered for tournament {} ({}/{} players)",
            id, tournament.players, tournament.max_players
        );

        if !self.schedule.iter().any(|s| s == id) {
            self.schedule.push(id.to_string());
        }
        Ok(&self.tournaments[idx])
    }

    /// Registered -> Open. The player count cannot drop below zero because
    /// only a registered member can withdraw.
    pub fn withdraw(&mut self, id: &str) -> Result<&Tournament> {
        let idx = self.position(id)?;
        let tournament = &mut self.tournaments[idx];

        if !tournament.registered {
            warn!("withdraw rejected: not registered for tournament {}", id);
            return Err(AppError::NotRegistered(id.to_string()));
        }

        tournament.registered = false;
        tournament.players = tournament.players.saturating_sub(1);
        tournament.participants.retain(|p| p != SELF_PARTICIPANT);
        info!(
            "Withdrew from tournament {} ({}/{} players)",
            id, tournament.players, tournament.max_players
        );

        self.schedule.retain(|s| s != id);
        Ok(&self.tournaments[idx])
    }

    pub fn view_participants(&self, id: &str) -> Result<&[String]> {
        let tournament = self.get(id)?;
        debug!("{} participants listed for tournament {}", tournament.participants.len(), id);
        Ok(&tournament.participants)
    }

    /// Registered tournaments in the order the member signed up.
    pub fn schedule(&self) -> Vec<&Tournament> {
        self.schedule
            .iter()
            .filter_map(|id| self.tournaments.iter().find(|t| &t.id == id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegistrationState;
    use crate::seed;

    fn registry() -> TournamentRegistry {
        TournamentRegistry::new(seed::tournaments())
    }

    #[test]
    fn seeded_schedule_holds_registered_tournaments() {
        let reg = registry();
        let ids: Vec<_> = reg.schedule().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn register_moves_open_to_registered() {
        let mut reg = registry();
        let before = reg.get("2").unwrap().players;

        let t = reg.register("2").unwrap();
        assert!(t.registered);
        assert_eq!(t.players, before + 1);
        assert_eq!(t.state(), RegistrationState::Registered);
        assert!(t.participants.iter().any(|p| p == SELF_PARTICIPANT));

        let ids: Vec<_> = reg.schedule().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn second_register_is_rejected_without_double_counting() {
        let mut reg = registry();
        reg.register("2").unwrap();
        let players = reg.get("2").unwrap().players;

        assert_eq!(reg.register("2"), Err(AppError::AlreadyRegistered("2".to_string())));
        assert_eq!(reg.get("2").unwrap().players, players);
        assert_eq!(reg.schedule().iter().filter(|t| t.id == "2").count(), 1);
    }

    #[test]
    fn full_tournament_refuses_registration() {
        let mut reg = registry();
        let err = reg.register("3").unwrap_err();
        assert_eq!(
            err,
            AppError::CapacityExceeded {
                id: "3".to_string(),
                max: 64
            }
        );
        let t = reg.get("3").unwrap();
        assert_eq!(t.players, 64);
        assert!(!t.registered);
        assert_eq!(t.state(), RegistrationState::Full);
    }

    #[test]
    fn withdraw_moves_registered_to_open() {
        let mut reg = registry();
        let t = reg.withdraw("1").unwrap();
        assert!(!t.registered);
        assert_eq!(t.players, 86);
        assert!(!t.participants.iter().any(|p| p == SELF_PARTICIPANT));
        assert!(reg.schedule().is_empty());
    }

    #[test]
    fn withdraw_without_registration_keeps_count() {
        let mut reg = registry();
        assert_eq!(reg.withdraw("2"), Err(AppError::NotRegistered("2".to_string())));
        assert_eq!(reg.get("2").unwrap().players, 65);
    }

    #[test]
    fn schedule_reflects_current_counts() {
        let mut reg = registry();
        reg.register("2").unwrap();
        let scheduled = reg.schedule();
        assert_eq!(scheduled[1].players, 66);
    }

    #[test]
    fn unknown_tournament_is_not_found() {
        let mut reg = registry();
        assert!(matches!(reg.register("99"), Err(AppError::NotFound { .. })));
        assert!(matches!(reg.view_participants("99"), Err(AppError::NotFound { .. })));
    }

    #[test]
    fn participants_are_read_only() {
        let reg = registry();
        assert_eq!(reg.view_participants("2").unwrap(), ["Ahmed Hassan", "Sarah Mohamed"]);
    }
}
