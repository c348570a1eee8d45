//! Subscriber setup for applications embedding the path finder
use std::time::Instant;

use color_eyre::Result;
use human_repr::HumanDuration;
use tracing_subscriber::{
    fmt::{self, format::Writer, time::FormatTime},
    prelude::*,
    EnvFilter,
};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "WAYPATH_LOG";

/// Timestamps relative to subscriber installation
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RelativeTime {
    epoch: Instant,
}

impl Default for RelativeTime {
    fn default() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl FormatTime for RelativeTime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        write!(w, "{}", self.epoch.elapsed().human_duration())
    }
}

/// Install `color_eyre` hooks and a compact `fmt` subscriber filtered by
/// [`LOG_ENV`] (default `info`). Fails if either was already installed.
pub fn init() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(fmt::format().with_ansi(yansi::is_enabled()))
                .with_timer(RelativeTime::default())
                .compact(),
        )
        .with(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn init_only_once() {
        assert!(init().is_ok());
        tracing::info!("subscriber installed");
        assert!(init().is_err());
    }
}
