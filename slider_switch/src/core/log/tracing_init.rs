// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, registry::LookupSpan};

use super::{DisplayPreference, TracingConfig, rolling_file_appender_impl};

/// The concrete `fmt` layer type is unnameable once a writer is attached, so every
/// layer is built from this macro and boxed right away.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
    };
}

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

pub type BoxedLayers = Vec<Box<DynLayer<Registry>>>;

/// Builds (but does not install) the layers for `tracing_config`: the level filter,
/// then one `fmt` layer for each output it names.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(tracing_config: &TracingConfig) -> miette::Result<BoxedLayers> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = &tracing_config.writer_config;

    let mut layers: BoxedLayers = vec![Box::new(level_filter)];
    if let Some(display_preference) = writer_config.display_preference() {
        layers.push(create_display_layer(display_preference, level_filter));
    }
    if let Some(file_path) = writer_config.file_path() {
        layers.push(try_create_file_layer(file_path, level_filter)?);
    }
    Ok(layers)
}

pub fn create_display_layer<S>(
    display_preference: DisplayPreference,
    level_filter: LevelFilter,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber + for<'a> LookupSpan<'a>,
{
    match display_preference {
        DisplayPreference::Stdout => Box::new(
            create_fmt!()
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            create_fmt!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

/// File output has no ANSI colors.
///
/// # Errors
///
/// Returns an error if the log file (or its folder) can't be created.
pub fn try_create_file_layer<S>(
    file_path: &str,
    level_filter: LevelFilter,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber + for<'a> LookupSpan<'a>,
{
    let file = rolling_file_appender_impl::try_create(file_path)?;
    Ok(Box::new(
        create_fmt!()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    ))
}
