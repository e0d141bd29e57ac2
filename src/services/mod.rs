#[cfg(feature = "analytics")]
pub mod analytics;
pub mod booking;
pub mod carousel;
pub mod catalog;
pub mod directory;
pub mod registry;
pub mod tee_sheet;

pub use booking::{BookingConfirmation, BookingDraft, BookingOptions, LessonDraft, TeeTimeDraft};
pub use carousel::Carousel;
pub use catalog::{CatalogTab, EventCatalog};
pub use directory::MemberDirectory;
pub use registry::TournamentRegistry;
pub use tee_sheet::TeeSheet;
