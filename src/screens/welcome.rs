use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{LoginForm, RegistrationForm};
use crate::error::Result;
use crate::models::{Role, ServiceCard, Session, Slide};
use crate::AppState;

/// Screen shown after a successful sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Landing {
    Home,
    EventManagement,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedIn {
    pub session: Session,
    pub landing: Landing,
}

impl SignedIn {
    fn new(session: Session) -> Self {
        let landing = match session.role {
            Role::Admin => Landing::EventManagement,
            Role::Member | Role::Guest => Landing::Home,
        };
        Self { session, landing }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeView {
    pub club_name: String,
    pub hero_index: usize,
    pub hero: Vec<Slide>,
    pub services_index: usize,
    pub services: Vec<Vec<ServiceCard>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselKind {
    Hero,
    Services,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlideRequest {
    pub carousel: CarouselKind,
    pub index: usize,
}

pub fn view(state: &AppState) -> WelcomeView {
    WelcomeView {
        club_name: state.config.app.club_name.clone(),
        hero_index: state.hero.index(),
        hero: state.hero.items().to_vec(),
        services_index: state.services.index(),
        services: state.services.items().to_vec(),
    }
}

/// Auto-rotation tick: both carousels move one slide forward.
pub fn advance(state: &mut AppState) -> WelcomeView {
    state.hero.advance();
    state.services.advance();
    view(state)
}

/// Pagination dot tapped.
pub fn go_to(state: &mut AppState, req: SlideRequest) -> Result<WelcomeView> {
    match req.carousel {
        CarouselKind::Hero => state.hero.go_to(req.index)?,
        CarouselKind::Services => state.services.go_to(req.index)?,
    }
    Ok(view(state))
}

pub fn sign_in(state: &AppState, form: LoginForm) -> Result<SignedIn> {
    let session = state.auth.sign_in(&form)?;
    Ok(SignedIn::new(session))
}

pub fn register(state: &AppState, form: RegistrationForm) -> Result<SignedIn> {
    let session = state.auth.register(&form)?;
    Ok(SignedIn::new(session))
}

pub fn sign_out(state: &AppState, session: &Session) -> Session {
    let guest = state.auth.sign_out(session);
    info!("Returned to welcome screen");
    guest
}
