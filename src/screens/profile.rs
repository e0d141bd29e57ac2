use serde::Serialize;

use crate::error::Result;
use crate::models::{MemberProfile, ProfileStats, Session};
use crate::screens::require_member;
use crate::seed;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub profile: MemberProfile,
    pub stats: ProfileStats,
    pub activity: Vec<&'static str>,
    pub account: Vec<&'static str>,
    pub registered_tournaments: usize,
}

const ACTIVITY: [&str; 4] = [
    "Past Tee Bookings",
    "Past Lessons",
    "Tournament History",
    "Favorite Courses/Pros",
];

const ACCOUNT: [&str; 4] = [
    "Upcoming Reservations",
    "Payment Methods",
    "Change Password",
    "Sign Out",
];

/// The demo member's card. A signed-in member sees their own name and email on it.
pub fn view(state: &AppState, session: &Session) -> Result<ProfileView> {
    require_member(session)?;
    let mut profile = seed::demo_profile();
    if let Some(name) = &session.display_name {
        profile.name = name.clone();
    }
    if let Some(email) = &session.email {
        profile.email = email.clone();
    }

    Ok(ProfileView {
        profile,
        stats: seed::demo_stats(),
        activity: ACTIVITY.to_vec(),
        account: ACCOUNT.to_vec(),
        registered_tournaments: state.tournaments.schedule().len(),
    })
}
