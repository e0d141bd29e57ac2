//! analytics.rs
//!
//! Figures for the admin analytics screen.
//!
//! Includes:
//! - The club's reported headline cards, monthly trend and popular events.
//! - A live summary counted from the catalog, directory and tee sheet.

use serde::Serialize;
use tracing::info;

use crate::models::{EventStatus, EventType, MemberStatus, MembershipType, TeeSlotStatus};
use crate::services::{EventCatalog, MemberDirectory, TeeSheet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub month: String,
    pub revenue: u32,
    pub bookings: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularEvent {
    pub name: String,
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub event_type: EventType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSummary {
    pub events_by_type: Vec<TypeCount>,
    pub full_events: usize,
    pub cancelled_events: usize,
    pub total_capacity: u32,
    pub total_participants: u32,
    /// Percentage of catalog places taken, 0 when the catalog is empty.
    pub fill_rate: f64,
    pub active_members: usize,
    pub suspended_members: usize,
    pub premium_members: usize,
    pub standard_members: usize,
    pub open_tee_slots: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub stat_cards: Vec<StatCard>,
    pub trend: Vec<TrendPoint>,
    pub popular_events: Vec<PopularEvent>,
    pub live: LiveSummary,
}

/// Money figures on the stat cards carry the club's currency code.
pub fn report(
    catalog: &EventCatalog,
    directory: &MemberDirectory,
    tee_sheet: &TeeSheet,
    currency: &str,
) -> AnalyticsReport {
    let live = live_summary(catalog, directory, tee_sheet);
    info!(
        "Analytics: {} events, {}/{} places taken, {} active members",
        catalog.len(),
        live.total_participants,
        live.total_capacity,
        live.active_members
    );
    AnalyticsReport {
        stat_cards: stat_cards(currency),
        trend: monthly_trend(),
        popular_events: popular_events(),
        live,
    }
}

pub fn live_summary(catalog: &EventCatalog, directory: &MemberDirectory, tee_sheet: &TeeSheet) -> LiveSummary {
    let events = catalog.events();
    let events_by_type = [EventType::Tournament, EventType::SpecialEvent, EventType::Lesson]
        .into_iter()
        .map(|event_type| TypeCount {
            event_type,
            count: events.iter().filter(|e| e.event_type == event_type).count(),
        })
        .collect();

    let total_capacity: u32 = events.iter().map(|e| e.max_participants).sum();
    let total_participants: u32 = events.iter().map(|e| e.current_participants).sum();
    let fill_rate = if total_capacity == 0 {
        0.0
    } else {
        f64::from(total_participants) * 100.0 / f64::from(total_capacity)
    };

    let members = directory.members();
    LiveSummary {
        events_by_type,
        full_events: events.iter().filter(|e| e.status() == EventStatus::Full).count(),
        cancelled_events: events.iter().filter(|e| e.status() == EventStatus::Cancelled).count(),
        total_capacity,
        total_participants,
        fill_rate,
        active_members: directory.count_by_status(MemberStatus::Active),
        suspended_members: directory.count_by_status(MemberStatus::Suspended),
        premium_members: members.iter().filter(|m| m.membership_type == MembershipType::Premium).count(),
        standard_members: members.iter().filter(|m| m.membership_type == MembershipType::Standard).count(),
        open_tee_slots: tee_sheet
            .slots()
            .iter()
            .filter(|s| s.status() == TeeSlotStatus::Available)
            .count(),
    }
}

fn stat_cards(currency: &str) -> Vec<StatCard> {
    [
        ("Monthly Revenue", format!("{currency} 52,000"), "+15.2% from last month"),
        ("Total Bookings", "280".to_string(), "+8.1% from last month"),
        ("Active Members", "1,234".to_string(), "+12% growth"),
        ("Avg. Revenue/Member", format!("{currency} 42.14"), "+3.2% improvement"),
    ]
    .into_iter()
    .map(|(title, value, change)| StatCard {
        title: title.to_string(),
        value,
        change: change.to_string(),
    })
    .collect()
}

fn monthly_trend() -> Vec<TrendPoint> {
    [
        ("Jan", 35_000, 180),
        ("Feb", 42_000, 220),
        ("Mar", 38_000, 195),
        ("Apr", 45_000, 240),
        ("May", 52_000, 280),
    ]
    .into_iter()
    .map(|(month, revenue, bookings)| TrendPoint {
        month: month.to_string(),
        revenue,
        bookings,
    })
    .collect()
}

fn popular_events() -> Vec<PopularEvent> {
    [
        ("Weekly Tournaments", "85% attendance"),
        ("Private Lessons", "78% booking rate"),
        ("Corporate Events", "92% satisfaction"),
    ]
    .into_iter()
    .map(|(name, metric)| PopularEvent {
        name: name.to_string(),
        metric: metric.to_string(),
    })
    .collect()
}
