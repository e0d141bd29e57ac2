use tracing::{debug, info};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Member, MemberStatus, MemberUpdate};

#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    members: Vec<Member>,
}

impl MemberDirectory {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn get(&self, id: &str) -> Result<&Member> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::not_found("member", id))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Member> {
        self.members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::not_found("member", id))
    }

    /// Case-insensitive substring search over name and email. A blank query lists everyone.
    pub fn search(&self, query: &str) -> Vec<&Member> {
        let needle = normalize_query(query);
        let found: Vec<&Member> = self.members.iter().filter(|m| m.matches(&needle)).collect();
        debug!("search {:?} matched {} members", needle, found.len());
        found
    }

    pub fn suspend(&mut self, id: &str) -> Result<&Member> {
        self.set_status(id, MemberStatus::Suspended)
    }

    pub fn activate(&mut self, id: &str) -> Result<&Member> {
        self.set_status(id, MemberStatus::Active)
    }

    fn set_status(&mut self, id: &str, status: MemberStatus) -> Result<&Member> {
        let member = self.get_mut(id)?;
        member.status = status;
        info!("Member {} ({}) is now {:?}", member.name, id, status);
        Ok(&*member)
    }

    pub fn update(&mut self, id: &str, changes: MemberUpdate) -> Result<&Member> {
        changes.validate()?;
        let member = self.get_mut(id)?;
        changes.apply(member);
        info!("Updated member {}", id);
        Ok(&*member)
    }

    pub fn count_by_status(&self, status: MemberStatus) -> usize {
        self.members.iter().filter(|m| m.status == status).count()
    }
}

// Outer whitespace only; the inside of the query is matched as typed.
fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
