use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipType {
    Premium,
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub handicap: f64,
    pub join_date: NaiveDate,
    pub membership_type: MembershipType,
    pub status: MemberStatus,
}

impl Member {
    // Case-insensitive substring match on name or email.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.email.to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    #[validate(custom(function = "crate::models::not_blank"))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub phone: Option<String>,
    #[validate(range(min = 0.0, max = 54.0))]
    pub handicap: Option<f64>,
    pub membership_type: Option<MembershipType>,
}

impl MemberUpdate {
    pub fn apply(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
        if let Some(phone) = self.phone {
            member.phone = phone;
        }
        if let Some(handicap) = self.handicap {
            member.handicap = handicap;
        }
        if let Some(kind) = self.membership_type {
            member.membership_type = kind;
        }
    }
}
