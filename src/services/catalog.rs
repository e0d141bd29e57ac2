//! catalog.rs
//!
//! Events, tournaments and lessons managed from the admin panel.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Event, EventDraft, EventType, EventUpdate};

/// Admin panel tabs. Tee times live on the tee sheet, not in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTab {
    #[default]
    Events,
    Lessons,
    #[serde(rename = "teetimes")]
    TeeTimes,
}

impl CatalogTab {
    pub fn includes(self, event_type: EventType) -> bool {
        match self {
            CatalogTab::Events => {
                matches!(event_type, EventType::Tournament | EventType::SpecialEvent)
            }
            CatalogTab::Lessons => event_type == EventType::Lesson,
            CatalogTab::TeeTimes => false,
        }
    }
}

impl FromStr for CatalogTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "events" => Ok(CatalogTab::Events),
            "lessons" => Ok(CatalogTab::Lessons),
            "teetimes" => Ok(CatalogTab::TeeTimes),
            other => Err(AppError::validation(format!("unknown tab {other:?}"))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("event", id))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Event> {
        self.events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("event", id))
    }

    /// Validates the draft and appends it with a fresh id, no participants and Active status.
    /// The catalog is untouched on failure.
    pub fn create(&mut self, draft: EventDraft) -> Result<&Event> {
        let event = draft
            .into_event(uuid::Uuid::new_v4().to_string())
            .inspect_err(|e| warn!("event create rejected: {}", e))?;

        info!("Created {} {} ({})", event.event_type.label(), event.name, event.id);
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    pub fn update(&mut self, id: &str, changes: EventUpdate) -> Result<&Event> {
        changes.validate()?;
        let event = self.get_mut(id)?;
        changes.apply(event);
        info!("Updated event {}", id);
        Ok(&*event)
    }

    pub fn cancel(&mut self, id: &str) -> Result<&Event> {
        let event = self.get_mut(id)?;
        event.cancelled = true;
        info!("Cancelled event {}", id);
        Ok(&*event)
    }

    /// Removes the entry. Confirmation happens before this is called.
    pub fn delete(&mut self, id: &str) -> Result<Event> {
        let idx = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("event", id))?;
        let removed = self.events.remove(idx);
        info!("Deleted event {} ({})", removed.name, id);
        Ok(removed)
    }

    /// Entries belonging to the tab, catalog order preserved.
    pub fn filter_by_tab(&self, tab: CatalogTab) -> Vec<&Event> {
        let filtered: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| tab.includes(e.event_type))
            .collect();
        debug!("{:?} tab shows {} of {} events", tab, filtered.len(), self.events.len());
        filtered
    }
}
