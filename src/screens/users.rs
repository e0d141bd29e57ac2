use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Member, MemberStatus, MemberUpdate, Session};
use crate::screens::{confirm, require_admin, ConfirmRequest, IdRequest, Message};
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberList {
    pub members: Vec<Member>,
    pub total: usize,
    pub active: usize,
    pub suspended: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    pub id: String,
    pub changes: MemberUpdate,
}

pub fn list(state: &AppState, session: &Session, req: SearchRequest) -> Result<MemberList> {
    require_admin(state, session)?;
    let directory = &state.directory;
    Ok(MemberList {
        members: directory.search(&req.query).into_iter().cloned().collect(),
        total: directory.members().len(),
        active: directory.count_by_status(MemberStatus::Active),
        suspended: directory.count_by_status(MemberStatus::Suspended),
    })
}

pub fn update(state: &mut AppState, session: &Session, req: UpdateRequest) -> Result<Message<Member>> {
    require_admin(state, session)?;
    let member = state.directory.update(&req.id, req.changes)?;
    Ok(Message::new("Member details updated", member.clone()))
}

pub fn suspend(state: &mut AppState, session: &Session, req: ConfirmRequest) -> Result<Message<Member>> {
    require_admin(state, session)?;
    state.directory.get(&req.id)?;
    confirm(
        req.confirmed,
        "Suspend Member",
        "Are you sure you want to suspend this member?",
    )?;
    let member = state.directory.suspend(&req.id)?;
    Ok(Message::new("Member has been suspended", member.clone()))
}

pub fn activate(state: &mut AppState, session: &Session, req: IdRequest) -> Result<Message<Member>> {
    require_admin(state, session)?;
    let member = state.directory.activate(&req.id)?;
    Ok(Message::new("Member has been activated", member.clone()))
}
