use anyhow::Context;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use golf_club::{
    auth::LoginForm,
    config::{Config, LogFormat},
    screens, AppState,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    let json_logs = config.app.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    info!(
        "Starting {} member app ({})",
        config.app.club_name, config.app.environment
    );

    let state = AppState::new(config).context("Failed to build application state")?;

    // Demo member so the member screens have something to render
    let signed_in = screens::welcome::sign_in(
        &state,
        LoginForm {
            email: "john.smith@email.com".to_string(),
            password: "demo".to_string(),
        },
    )?;
    let session = signed_in.session;

    let snapshot = json!({
        "welcome": screens::welcome::view(&state),
        "home": screens::home::dashboard(&state, &session)?,
        "tournaments": screens::tournaments::list(&state, &session)?,
        "teeTime": screens::tee_time::options(&state, &session)?,
        "lesson": screens::lesson::options(&state, &session)?,
        "profile": screens::profile::view(&state, &session)?,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    info!("Snapshot rendered");
    Ok(())
}
