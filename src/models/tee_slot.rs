use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeeSlotStatus {
    Available,
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeSlot {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub course: String,
    pub booked: u32,
    pub capacity: u32,
}

impl TeeSlot {
    pub fn status(&self) -> TeeSlotStatus {
        if self.booked >= self.capacity {
            TeeSlotStatus::Full
        } else {
            TeeSlotStatus::Available
        }
    }
}

/// Admin form for opening a run of tee slots on one course and day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeeSlotRequest {
    #[validate(custom(function = "crate::models::not_blank"))]
    pub course: String,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub date: String,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub start_time: String,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub end_time: String,
}
