use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Guest,
    Member,
    Admin,
}

/// Who is using the app. Handed to every screen instead of being inferred from navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: Role,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    pub fn guest() -> Self {
        Session {
            role: Role::Guest,
            email: None,
            display_name: None,
        }
    }

    pub fn member(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Session {
            role: Role::Member,
            email: Some(email.into()),
            display_name: Some(display_name.into()),
        }
    }

    pub fn admin(email: impl Into<String>) -> Self {
        Session {
            role: Role::Admin,
            email: Some(email.into()),
            display_name: Some("Admin".to_string()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role != Role::Guest
    }

    /// Member screens: any signed-in session.
    pub fn require_member(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Forbidden {
                required: Role::Member,
            })
        }
    }

    pub fn require_admin(&self) -> Result<()> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(AppError::Forbidden {
                required: Role::Admin,
            })
        }
    }
}
