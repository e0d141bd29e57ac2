use crate::error::{AppError, Result};
use crate::models::Session;
use crate::screens::require_admin;
use crate::services::analytics::{self, AnalyticsReport};
use crate::AppState;

pub fn report(state: &AppState, session: &Session) -> Result<AnalyticsReport> {
    require_admin(state, session)?;
    if !state.config.features.enable_analytics {
        return Err(AppError::FeatureDisabled("analytics"));
    }
    Ok(analytics::report(
        &state.catalog,
        &state.directory,
        &state.tee_sheet,
        &state.options.currency,
    ))
}
