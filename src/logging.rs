use crate::{Error, Result};
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Picks the effective log level: `RUST_LOG` when set, otherwise the
/// configured `server.logs.level`. Unknown level names are rejected.
pub fn resolve_level(env_level: Option<String>, configured: &str) -> Result<String> {
    let level = env_level.unwrap_or_else(|| configured.to_string());
    level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })?;
    Ok(level)
}

pub fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .json()
                .flatten_event(true),
        )
        .init();
}
