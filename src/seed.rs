//! Sample data every screen starts from. Nothing here outlives the process.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::{
    Course, Event, EventType, Instructor, Member, MemberProfile, MemberStatus, MembershipType,
    ProfileStats, ServiceCard, Slide, TeeSlot, Tournament, UpcomingLesson, UpcomingTeeTime,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Every half hour from `first` up to and including `last`.
pub fn half_hour_slots(first: NaiveTime, last: NaiveTime) -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    let mut t = first;
    while t <= last {
        slots.push(t);
        let (next, wrapped) = t.overflowing_add_signed(Duration::minutes(30));
        if wrapped != 0 {
            break;
        }
        t = next;
    }
    slots
}

pub fn tee_time_slots() -> Vec<NaiveTime> {
    half_hour_slots(time(6, 0), time(17, 30))
}

pub fn lesson_time_slots() -> Vec<NaiveTime> {
    half_hour_slots(time(8, 0), time(18, 30))
}

pub fn tournaments() -> Vec<Tournament> {
    vec![
        Tournament {
            id: "1".to_string(),
            name: "Weekly Member Championship".to_string(),
            sponsor: "New Giza Development".to_string(),
            sponsor_type: "main".to_string(),
            date: date(2025, 6, 7),
            time: time(8, 0),
            format: "Stroke Play".to_string(),
            entry_fee: 500,
            rules: "Full handicap allowance, medal play format".to_string(),
            description: "Weekly championship with prizes for overall winners and category winners."
                .to_string(),
            players: 87,
            max_players: 120,
            registered: true,
            participants: names(&["Ahmed Hassan", "Sarah Mohamed", "Omar Ali", "You"]),
        },
        Tournament {
            id: "2".to_string(),
            name: "Ramadan Night Tournament".to_string(),
            sponsor: "CIB Bank".to_string(),
            sponsor_type: "atm".to_string(),
            date: date(2025, 6, 14),
            time: time(19, 0),
            format: "Stableford".to_string(),
            entry_fee: 400,
            rules: "90% handicap allowance, best ball format available".to_string(),
            description: "Special Ramadan tournament with traditional iftar dinner included."
                .to_string(),
            players: 65,
            max_players: 80,
            registered: false,
            participants: names(&["Ahmed Hassan", "Sarah Mohamed"]),
        },
        Tournament {
            id: "3".to_string(),
            name: "Summer Classic Championship".to_string(),
            sponsor: "Mobil 1".to_string(),
            sponsor_type: "oil".to_string(),
            date: date(2025, 6, 21),
            time: time(6, 30),
            format: "Match Play".to_string(),
            entry_fee: 800,
            rules: "Scratch play, 18-hole matches".to_string(),
            description: "Prestigious summer championship with knockout format.".to_string(),
            players: 64,
            max_players: 64,
            registered: false,
            participants: names(&["Sarah Mohamed", "Omar Ali"]),
        },
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            name: "Weekly Tournament".to_string(),
            event_type: EventType::Tournament,
            date: date(2024, 6, 8),
            time: time(8, 0),
            sponsor: None,
            instructor: None,
            price: None,
            max_participants: 32,
            current_participants: 24,
            cancelled: false,
        },
        Event {
            id: "2".to_string(),
            name: "Red Bull Championship".to_string(),
            event_type: EventType::SpecialEvent,
            date: date(2024, 6, 15),
            time: time(9, 0),
            sponsor: Some("Red Bull".to_string()),
            instructor: None,
            price: None,
            max_participants: 50,
            current_participants: 45,
            cancelled: false,
        },
        Event {
            id: "3".to_string(),
            name: "Pro Lesson with Ahmed".to_string(),
            event_type: EventType::Lesson,
            date: date(2024, 6, 9),
            time: time(14, 0),
            sponsor: None,
            instructor: Some("Ahmed Hassan".to_string()),
            price: Some(150),
            max_participants: 4,
            current_participants: 1,
            cancelled: false,
        },
        Event {
            id: "4".to_string(),
            name: "Group Putting Clinic".to_string(),
            event_type: EventType::Lesson,
            date: date(2024, 6, 10),
            time: time(16, 0),
            sponsor: None,
            instructor: Some("Sarah Mohamed".to_string()),
            price: Some(75),
            max_participants: 8,
            current_participants: 6,
            cancelled: false,
        },
    ]
}

pub fn members() -> Vec<Member> {
    vec![
        Member {
            id: "1".to_string(),
            name: "Ahmed Hassan".to_string(),
            email: "ahmed.hassan@email.com".to_string(),
            phone: "+20 100 123 4567".to_string(),
            handicap: 12.0,
            join_date: date(2023, 1, 15),
            membership_type: MembershipType::Premium,
            status: MemberStatus::Active,
        },
        Member {
            id: "2".to_string(),
            name: "Sarah Mohamed".to_string(),
            email: "sarah.mohamed@email.com".to_string(),
            phone: "+20 100 987 6543".to_string(),
            handicap: 18.0,
            join_date: date(2023, 3, 22),
            membership_type: MembershipType::Standard,
            status: MemberStatus::Active,
        },
        Member {
            id: "3".to_string(),
            name: "Omar Ali".to_string(),
            email: "omar.ali@email.com".to_string(),
            phone: "+20 100 555 7890".to_string(),
            handicap: 8.0,
            join_date: date(2022, 11, 10),
            membership_type: MembershipType::Premium,
            status: MemberStatus::Suspended,
        },
    ]
}

pub fn courses() -> Vec<Course> {
    [
        ("main", "Main Course (18 holes)", 150),
        ("executive", "Executive Course (9 holes)", 85),
        ("practice", "Practice Range", 25),
    ]
    .into_iter()
    .map(|(id, name, price)| Course {
        id: id.to_string(),
        name: name.to_string(),
        price,
    })
    .collect()
}

pub fn instructors() -> Vec<Instructor> {
    vec![
        Instructor {
            id: "ahmed".to_string(),
            name: "Ahmed Hassan".to_string(),
            specialty: "Full Swing & Short Game".to_string(),
            experience: "15 years".to_string(),
            rate: 800,
            rating: 4.9,
            about: "Former Egyptian National Team player with expertise in all aspects of the game."
                .to_string(),
        },
        Instructor {
            id: "sarah".to_string(),
            name: "Sarah Mohamed".to_string(),
            specialty: "Putting & Mental Game".to_string(),
            experience: "12 years".to_string(),
            rate: 700,
            rating: 4.8,
            about: "Sports psychology certified with focus on course management and mental toughness."
                .to_string(),
        },
        Instructor {
            id: "omar".to_string(),
            name: "Omar Ali".to_string(),
            specialty: "Junior Development".to_string(),
            experience: "10 years".to_string(),
            rate: 600,
            rating: 4.7,
            about: "Specialized in youth development with proven track record of developing young talent."
                .to_string(),
        },
    ]
}

pub fn tee_slots(capacity: u32) -> Vec<TeeSlot> {
    [
        ("1", time(7, 0), "Championship Course", 3),
        ("2", time(7, 30), "Championship Course", 4),
        ("3", time(8, 0), "Executive Course", 2),
    ]
    .into_iter()
    .map(|(id, time, course, booked)| TeeSlot {
        id: id.to_string(),
        date: date(2024, 6, 8),
        time,
        course: course.to_string(),
        booked,
        capacity,
    })
    .collect()
}

pub fn upcoming_tee_times() -> Vec<UpcomingTeeTime> {
    vec![
        UpcomingTeeTime {
            id: 1,
            date: "Friday, June 2, 2025".to_string(),
            time: "08:30 AM".to_string(),
            course: "Main Course".to_string(),
            kind: "Open Match".to_string(),
            players: 3,
        },
        UpcomingTeeTime {
            id: 2,
            date: "Sunday, June 4, 2025".to_string(),
            time: "10:00 AM".to_string(),
            course: "Main Course".to_string(),
            kind: "Private".to_string(),
            players: 4,
        },
    ]
}

pub fn upcoming_lessons() -> Vec<UpcomingLesson> {
    vec![
        UpcomingLesson {
            id: 1,
            lesson_type: "Private Lesson".to_string(),
            instructor: "Ahmed Hassan".to_string(),
            date: "Tomorrow, 10:00 AM".to_string(),
            status: "confirmed".to_string(),
        },
        UpcomingLesson {
            id: 2,
            lesson_type: "Group Lesson".to_string(),
            instructor: "Sarah Mohamed".to_string(),
            date: "June 5, 2025, 2:00 PM".to_string(),
            status: "confirmed".to_string(),
        },
    ]
}

pub fn hero_slides() -> Vec<Slide> {
    [
        (
            1,
            "New Giza Golf Club",
            "Experience Premium Golf Excellence",
            "https://images.pexels.com/photos/1325735/pexels-photo-1325735.jpeg",
            "Championship 18-hole course with stunning views",
        ),
        (
            2,
            "World-Class Facilities",
            "State-of-the-Art Golf Experience",
            "https://images.pexels.com/photos/1325673/pexels-photo-1325673.jpeg",
            "Professional training facilities and premium amenities",
        ),
        (
            3,
            "Exclusive Membership",
            "Join Our Elite Golf Community",
            "https://images.pexels.com/photos/1325674/pexels-photo-1325674.jpeg",
            "Connect with fellow golf enthusiasts and professionals",
        ),
    ]
    .into_iter()
    .map(|(id, title, subtitle, image, description)| Slide {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        image: image.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn service_pages() -> Vec<Vec<ServiceCard>> {
    let card = |title: &str, description: &str| ServiceCard {
        title: title.to_string(),
        description: description.to_string(),
    };
    vec![
        vec![
            card(
                "Tee Time Booking",
                "Reserve your preferred tee times with flexible match visibility options. Create open matches or private sessions.",
            ),
            card(
                "Private Lessons",
                "Book personalized lessons with our professional instructors. View bios, availability, and pricing.",
            ),
        ],
        vec![
            card(
                "Tournaments",
                "Register for weekly tournaments and special events. View participants and tournament details.",
            ),
            card(
                "Pro Shop",
                "Browse our premium golf equipment and apparel. Exclusive member discounts available.",
            ),
        ],
    ]
}

pub fn demo_profile() -> MemberProfile {
    MemberProfile {
        name: "John Smith".to_string(),
        email: "john.smith@email.com".to_string(),
        handicap: 12.4,
        member_since: 2022,
        membership_tier: "Gold".to_string(),
        member_id: "NGC-2022-001".to_string(),
    }
}

pub fn demo_stats() -> ProfileStats {
    ProfileStats {
        total_rounds: 34,
        total_time: "72h".to_string(),
        achievements: names(&["Played 10 rounds", "Won a tournament"]),
    }
}

/// Rounds logged this month on the home dashboard.
pub const ROUNDS_THIS_MONTH: u32 = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_lists_cover_opening_hours() {
        let tee = tee_time_slots();
        assert_eq!(tee.len(), 24);
        assert_eq!(tee.first(), Some(&time(6, 0)));
        assert_eq!(tee.last(), Some(&time(17, 30)));

        let lessons = lesson_time_slots();
        assert_eq!(lessons.len(), 22);
        assert_eq!(lessons.last(), Some(&time(18, 30)));
    }

    #[test]
    fn seeded_full_tournament_matches_counts() {
        let seeded = tournaments();
        let full: Vec<_> = seeded.iter().filter(|t| t.is_full()).map(|t| t.id.as_str()).collect();
        assert_eq!(full, vec!["3"]);
    }
}
