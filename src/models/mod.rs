pub mod booking;
pub mod content;
pub mod event;
pub mod member;
pub mod profile;
pub mod session;
pub mod tee_slot;
pub mod tournament;

pub use booking::{Course, Instructor, LessonType, MatchVisibility, PaymentMethod, UpcomingLesson, UpcomingTeeTime};
pub use content::{ServiceCard, Slide};
pub use event::{Event, EventDraft, EventStatus, EventType, EventUpdate};
pub use member::{Member, MemberStatus, MemberUpdate, MembershipType};
pub use profile::{MemberProfile, ProfileStats};
pub use session::{Role, Session};
pub use tee_slot::{TeeSlot, TeeSlotRequest, TeeSlotStatus};
pub use tournament::{RegistrationState, Tournament};

/// Required text fields: whitespace alone does not count as filled in.
pub(crate) fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}
