use chrono::Duration;
use tracing::{info, warn};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::event::{parse_date, parse_time};
use crate::models::{TeeSlot, TeeSlotRequest};

const SLOT_MINUTES: i64 = 30;

/// Tee times opened by the admin, one entry per starting time.
#[derive(Debug, Clone)]
pub struct TeeSheet {
    slots: Vec<TeeSlot>,
    capacity: u32,
}

impl TeeSheet {
    pub fn new(slots: Vec<TeeSlot>, capacity: u32) -> Self {
        Self { slots, capacity }
    }

    pub fn slots(&self) -> &[TeeSlot] {
        &self.slots
    }

    pub fn get(&self, id: &str) -> Result<&TeeSlot> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found("tee slot", id))
    }

    /// Opens a slot every half hour from start (inclusive) to end (exclusive).
    pub fn create_slots(&mut self, request: TeeSlotRequest) -> Result<Vec<TeeSlot>> {
        request.validate()?;
        let date = parse_date(&request.date)?;
        let start = parse_time(&request.start_time)?;
        let end = parse_time(&request.end_time)?;
        if end <= start {
            warn!("tee slot request rejected: {} is not after {}", end, start);
            return Err(AppError::validation("end time must be after start time"));
        }

        let course = request.course.trim().to_string();
        let mut created = Vec::new();
        let mut time = start;
        while time < end {
            created.push(TeeSlot {
                id: uuid::Uuid::new_v4().to_string(),
                date,
                time,
                course: course.clone(),
                booked: 0,
                capacity: self.capacity,
            });
            let (next, wrapped) = time.overflowing_add_signed(Duration::minutes(SLOT_MINUTES));
            if wrapped != 0 {
                break;
            }
            time = next;
        }

        info!("Opened {} tee slots on {} for {}", created.len(), date, course);
        self.slots.extend(created.iter().cloned());
        Ok(created)
    }

    pub fn delete(&mut self, id: &str) -> Result<TeeSlot> {
        let idx = self
            .slots
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::not_found("tee slot", id))?;
        let removed = self.slots.remove(idx);
        info!("Removed tee slot {} {} {}", removed.date, removed.time, removed.course);
        Ok(removed)
    }
}
