//! Mock sign-in. There is no account store: the configured admin credentials
//! open an admin session and any other well-formed credentials open a member
//! session.

use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::config::AuthConfig;
use crate::error::{AppError, Result};
use crate::models::Session;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[validate(custom(function = "crate::models::not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "crate::models::not_blank"))]
    pub phone: String,
    #[serde(default)]
    pub handicap: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Authenticator {
    admin_email: String,
    admin_hash: String,
}

impl Authenticator {
    /// Hashes the admin password once; the plain text is not kept.
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let admin_hash = bcrypt::hash(&config.admin_password, config.bcrypt_cost)
            .map_err(|e| AppError::Config(format!("cannot hash admin password: {e}")))?;
        Ok(Self {
            admin_email: config.admin_email.clone(),
            admin_hash,
        })
    }

    fn is_admin_email(&self, email: &str) -> bool {
        email.trim().eq_ignore_ascii_case(&self.admin_email)
    }

    pub fn sign_in(&self, form: &LoginForm) -> Result<Session> {
        form.validate()?;

        if self.is_admin_email(&form.email) {
            let verified = bcrypt::verify(&form.password, &self.admin_hash).unwrap_or(false);
            if !verified {
                warn!("admin sign-in rejected for {}", form.email);
                return Err(AppError::InvalidCredentials);
            }
            info!("Admin signed in: {}", form.email);
            return Ok(Session::admin(form.email.trim()));
        }

        let email = form.email.trim();
        info!("Member signed in: {}", email);
        Ok(Session::member(email, display_name_from_email(email)))
    }

    pub fn register(&self, form: &RegistrationForm) -> Result<Session> {
        form.validate()?;
        if !form.handicap.trim().is_empty() {
            let handicap: f64 = form
                .handicap
                .trim()
                .parse()
                .map_err(|_| AppError::validation("handicap must be a number"))?;
            if !(0.0..=54.0).contains(&handicap) {
                return Err(AppError::validation("handicap must be between 0 and 54"));
            }
        }
        if self.is_admin_email(&form.email) {
            warn!("registration rejected: {} is reserved", form.email);
            return Err(AppError::InvalidCredentials);
        }

        let name = format!("{} {}", form.first_name.trim(), form.last_name.trim());
        info!("Member registered: {} <{}>", name, form.email.trim());
        Ok(Session::member(form.email.trim(), name))
    }

    pub fn sign_out(&self, session: &Session) -> Session {
        if let Some(email) = &session.email {
            info!("Signed out: {}", email);
        }
        Session::guest()
    }
}

/// "john.smith@email.com" -> "John Smith".
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
