use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::Session;
use crate::screens::require_member;
use crate::seed;
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub rounds_this_month: u32,
    pub upcoming_lessons: usize,
    pub tournament_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub club_name: String,
    pub welcome: String,
    pub member_info: String,
    pub stats: DashboardStats,
    pub quick_actions: Vec<QuickAction>,
}

const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Book Tee Time",
        description: "Reserve your preferred tee times and create matches",
        button: "Book Now",
    },
    QuickAction {
        title: "Book Lesson",
        description: "Schedule private or group lessons with instructors",
        button: "Schedule Lesson",
    },
    QuickAction {
        title: "Tournaments",
        description: "Register for upcoming tournaments and events",
        button: "View Tournaments",
    },
];

pub fn dashboard(state: &AppState, session: &Session) -> Result<Dashboard> {
    require_member(session)?;
    let profile = seed::demo_profile();
    let name = session.display_name.clone().unwrap_or(profile.name);

    let stats = DashboardStats {
        rounds_this_month: seed::ROUNDS_THIS_MONTH,
        upcoming_lessons: state.upcoming_lessons.len(),
        tournament_entries: state.tournaments.schedule().len(),
    };
    debug!("dashboard for {}: {:?}", name, stats);

    Ok(Dashboard {
        club_name: state.config.app.club_name.clone(),
        welcome: format!("Welcome Back, {name}"),
        member_info: format!(
            "Handicap: {} | Membership: {}",
            profile.handicap, profile.membership_tier
        ),
        stats,
        quick_actions: QUICK_ACTIONS.to_vec(),
    })
}
