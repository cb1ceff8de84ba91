//! Tracing setup: structured logging with span definitions.

pub mod spans;

use symptom_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`.
///
/// The variable named by `config.env_var` wins when it is set and parses;
/// otherwise `config.log_level` applies.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(&config.env_var).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn try_init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = build_filter(config);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}

/// Install the global subscriber, ignoring a subscriber that is already set.
pub fn init_tracing(config: &ObservabilityConfig) {
    if !try_init_tracing(config) {
        tracing::debug!("tracing subscriber already installed");
    }
}
