pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod screens;
pub mod seed;
pub mod services;

use tracing::info;

use crate::auth::Authenticator;
use crate::models::{ServiceCard, Slide, UpcomingLesson, UpcomingTeeTime};
use crate::services::{BookingOptions, Carousel, EventCatalog, MemberDirectory, TeeSheet, TournamentRegistry};

// Shared state for every screen
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::Config,
    pub auth: Authenticator,
    pub tournaments: TournamentRegistry,
    pub catalog: EventCatalog,
    pub directory: MemberDirectory,
    pub tee_sheet: TeeSheet,
    pub options: BookingOptions,
    pub upcoming_tee_times: Vec<UpcomingTeeTime>,
    pub upcoming_lessons: Vec<UpcomingLesson>,
    pub hero: Carousel<Slide>,
    pub services: Carousel<Vec<ServiceCard>>,
}

impl AppState {
    /// Builds every view-model from the seed data.
    pub fn new(config: config::Config) -> error::Result<Self> {
        let auth = Authenticator::new(&config.auth)?;

        let tournaments = TournamentRegistry::new(seed::tournaments());
        let catalog = EventCatalog::new(seed::events());
        let directory = MemberDirectory::new(seed::members());
        let tee_sheet = TeeSheet::new(
            seed::tee_slots(config.booking.slot_capacity),
            config.booking.slot_capacity,
        );
        let options = BookingOptions::from_seed(&config.booking);

        info!(
            "Seeded {}: {} tournaments, {} events, {} members, {} tee slots",
            config.app.club_name,
            tournaments.tournaments().len(),
            catalog.len(),
            directory.members().len(),
            tee_sheet.slots().len()
        );

        Ok(Self {
            auth,
            tournaments,
            catalog,
            directory,
            tee_sheet,
            options,
            upcoming_tee_times: seed::upcoming_tee_times(),
            upcoming_lessons: seed::upcoming_lessons(),
            hero: Carousel::new(seed::hero_slides()),
            services: Carousel::new(seed::service_pages()),
            config,
        })
    }
}
