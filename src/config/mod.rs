use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::error::AppError;

// Top-level configuration: one section per concern
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub booking: BookingConfig,
    pub features: FeatureFlags,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub club_name: String,
    pub environment: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format {other:?}")),
        }
    }
}

// Mock sign-in. The admin password is hashed as soon as the authenticator is built.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub admin_email: String,
    pub admin_password: String,
    pub bcrypt_cost: u32,
}

// Pricing and tee sheet settings
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    pub group_discount_percent: u32,
    pub currency: String,
    pub slot_capacity: u32,
}

// Feature flags for switching admin surfaces on and off
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    pub enable_admin: bool,
    pub enable_analytics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                club_name: "New Giza Golf Club".to_string(),
                environment: "development".to_string(),
                rust_log: "golf_club=debug".to_string(),
                log_format: LogFormat::Pretty,
            },
            auth: AuthConfig {
                admin_email: "admin@gmail.com".to_string(),
                admin_password: "admin123".to_string(),
                bcrypt_cost: 10,
            },
            booking: BookingConfig {
                group_discount_percent: 20,
                currency: "EGP".to_string(),
                slot_capacity: 4,
            },
            features: FeatureFlags {
                enable_admin: true,
                enable_analytics: true,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Config::default();
        let config = Config {
            app: AppConfig {
                club_name: string_var("CLUB_NAME", defaults.app.club_name),
                environment: string_var("ENVIRONMENT", defaults.app.environment),
                rust_log: string_var("RUST_LOG", defaults.app.rust_log),
                log_format: parsed_var("LOG_FORMAT", defaults.app.log_format)?,
            },
            auth: AuthConfig {
                admin_email: string_var("ADMIN_EMAIL", defaults.auth.admin_email),
                admin_password: string_var("ADMIN_PASSWORD", defaults.auth.admin_password),
                bcrypt_cost: parsed_var("BCRYPT_COST", defaults.auth.bcrypt_cost)?,
            },
            booking: BookingConfig {
                group_discount_percent: parsed_var(
                    "GROUP_DISCOUNT_PERCENT",
                    defaults.booking.group_discount_percent,
                )?,
                currency: string_var("CURRENCY", defaults.booking.currency),
                slot_capacity: parsed_var("TEE_SLOT_CAPACITY", defaults.booking.slot_capacity)?,
            },
            features: FeatureFlags {
                enable_admin: parsed_var("ENABLE_ADMIN", defaults.features.enable_admin)?,
                enable_analytics: parsed_var("ENABLE_ANALYTICS", defaults.features.enable_analytics)?,
            },
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.booking.group_discount_percent > 100 {
            return Err(AppError::Config(
                "GROUP_DISCOUNT_PERCENT must be between 0 and 100".to_string(),
            ));
        }
        if self.booking.slot_capacity == 0 {
            return Err(AppError::Config("TEE_SLOT_CAPACITY must be at least 1".to_string()));
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(AppError::Config("BCRYPT_COST must be between 4 and 31".to_string()));
        }
        Ok(())
    }
}

fn string_var(name: &str, default: String) -> String {
    env::var(name).unwrap_or(default)
}

fn parsed_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{name} is invalid: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_club_settings() {
        let config = Config::default();
        assert_eq!(config.auth.admin_email, "admin@gmail.com");
        assert_eq!(config.booking.group_discount_percent, 20);
        assert_eq!(config.booking.slot_capacity, 4);
        assert!(config.check().is_ok());
    }

    #[test]
    fn out_of_range_discount_is_rejected() {
        let mut config = Config::default();
        config.booking.group_discount_percent = 120;
        assert!(matches!(config.check(), Err(AppError::Config(_))));
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
