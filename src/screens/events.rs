//! Event management: catalog tabs plus the tee sheet.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Event, EventDraft, EventStatus, EventUpdate, Session, TeeSlot, TeeSlotRequest, TeeSlotStatus};
use crate::screens::{confirm, require_admin, ConfirmRequest, Message};
use crate::services::CatalogTab;
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    #[serde(flatten)]
    pub event: Event,
    pub status: EventStatus,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        EventCard {
            event: event.clone(),
            status: event.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCard {
    #[serde(flatten)]
    pub slot: TeeSlot,
    pub status: TeeSlotStatus,
}

impl From<&TeeSlot> for SlotCard {
    fn from(slot: &TeeSlot) -> Self {
        SlotCard {
            slot: slot.clone(),
            status: slot.status(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRequest {
    #[serde(default)]
    pub tab: CatalogTab,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventList {
    pub tab: CatalogTab,
    pub events: Vec<EventCard>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    pub id: String,
    pub changes: EventUpdate,
}

pub fn list(state: &AppState, session: &Session, req: ListRequest) -> Result<EventList> {
    require_admin(state, session)?;
    Ok(EventList {
        tab: req.tab,
        events: state
            .catalog
            .filter_by_tab(req.tab)
            .into_iter()
            .map(EventCard::from)
            .collect(),
    })
}

pub fn create(state: &mut AppState, session: &Session, draft: EventDraft) -> Result<Message<EventCard>> {
    require_admin(state, session)?;
    let event = state.catalog.create(draft)?;
    Ok(Message::new(
        format!("{} created successfully!", event.event_type.label()),
        EventCard::from(event),
    ))
}

pub fn update(state: &mut AppState, session: &Session, req: UpdateRequest) -> Result<Message<EventCard>> {
    require_admin(state, session)?;
    let event = state.catalog.update(&req.id, req.changes)?;
    Ok(Message::new(
        format!("{} updated", event.name),
        EventCard::from(event),
    ))
}

pub fn cancel(state: &mut AppState, session: &Session, req: ConfirmRequest) -> Result<Message<EventCard>> {
    require_admin(state, session)?;
    state.catalog.get(&req.id)?;
    confirm(
        req.confirmed,
        "Cancel Event",
        "Are you sure you want to cancel this event?",
    )?;
    let event = state.catalog.cancel(&req.id)?;
    Ok(Message::new(
        format!("{} has been cancelled", event.name),
        EventCard::from(event),
    ))
}

pub fn delete(state: &mut AppState, session: &Session, req: ConfirmRequest) -> Result<Message<Event>> {
    require_admin(state, session)?;
    state.catalog.get(&req.id)?;
    confirm(
        req.confirmed,
        "Delete Event",
        "Are you sure you want to delete this event?",
    )?;
    let removed = state.catalog.delete(&req.id)?;
    Ok(Message::new(format!("{} deleted", removed.name), removed))
}

pub fn tee_sheet(state: &AppState, session: &Session) -> Result<Vec<SlotCard>> {
    require_admin(state, session)?;
    Ok(state.tee_sheet.slots().iter().map(SlotCard::from).collect())
}

pub fn create_tee_slots(
    state: &mut AppState,
    session: &Session,
    req: TeeSlotRequest,
) -> Result<Message<Vec<SlotCard>>> {
    require_admin(state, session)?;
    let created = state.tee_sheet.create_slots(req)?;
    Ok(Message::new(
        format!("{} tee times added", created.len()),
        created.iter().map(SlotCard::from).collect(),
    ))
}

pub fn delete_tee_slot(
    state: &mut AppState,
    session: &Session,
    req: ConfirmRequest,
) -> Result<Message<TeeSlot>> {
    require_admin(state, session)?;
    state.tee_sheet.get(&req.id)?;
    confirm(
        req.confirmed,
        "Delete Tee Time",
        "Are you sure you want to delete this tee time?",
    )?;
    let removed = state.tee_sheet.delete(&req.id)?;
    Ok(Message::new("Tee time deleted", removed))
}
