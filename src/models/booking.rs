use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub rate: u32,
    pub rating: f32,
    pub about: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Private,
    Group,
    Playing,
}

impl LessonType {
    pub const ALL: [LessonType; 3] = [LessonType::Private, LessonType::Group, LessonType::Playing];

    pub fn name(self) -> &'static str {
        match self {
            LessonType::Private => "Private Lesson",
            LessonType::Group => "Group Lesson",
            LessonType::Playing => "Playing Lesson",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LessonType::Private => "One-on-one instruction",
            LessonType::Group => "2-4 players (group discount)",
            LessonType::Playing => "On-course instruction",
        }
    }

    pub fn is_discounted(self) -> bool {
        self == LessonType::Group
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Visa,
    Cash,
    #[serde(rename = "apple")]
    ApplePay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Visa, PaymentMethod::Cash, PaymentMethod::ApplePay];

    pub fn name(self) -> &'static str {
        match self {
            PaymentMethod::Visa => "Visa Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::ApplePay => "Apple Pay",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PaymentMethod::Visa => "Pay with your Visa credit or debit card",
            PaymentMethod::Cash => "Pay with cash at the club",
            PaymentMethod::ApplePay => "Pay securely with Apple Pay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchVisibility {
    #[default]
    Open,
    Private,
}

impl MatchVisibility {
    pub fn label(self) -> &'static str {
        match self {
            MatchVisibility::Open => "Open Match",
            MatchVisibility::Private => "Private",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingTeeTime {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub course: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub players: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingLesson {
    pub id: u32,
    #[serde(rename = "type")]
    pub lesson_type: String,
    pub instructor: String,
    pub date: String,
    pub status: String,
}
