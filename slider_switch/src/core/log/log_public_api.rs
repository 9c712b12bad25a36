// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::{TracingConfig, try_create_layers};
use crate::ok;

/// Returns `true` when the config asks for no logging at all.
fn is_logging_off(config: &TracingConfig) -> bool {
    config.get_level_filter() == tracing_core::LevelFilter::OFF
}

/// Installs the process wide subscriber. Once installed it stays for the lifetime of
/// the process, so call this from a binary such as `slider_switch_demo`, not a library.
/// See [`tracing::subscriber::set_global_default`].
///
/// Nothing is logged unless this (or the thread local variant) is called with a level
/// filter other than [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let config: TracingConfig = options.into();
    if is_logging_off(&config) {
        return ok!();
    }

    tracing_subscriber::registry()
        .with(try_create_layers(&config)?)
        .try_init()
        .into_diagnostic()
}

/// Installs a subscriber for the current thread only, which suits tests. It is active
/// while the returned [`DefaultGuard`] is alive. See [`tracing::subscriber::set_default`].
///
/// Returns `None` and installs nothing when the level filter is
/// [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let config: TracingConfig = options.into();
    if is_logging_off(&config) {
        return Ok(None);
    }

    let subscriber = tracing_subscriber::registry().with(try_create_layers(&config)?);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}
