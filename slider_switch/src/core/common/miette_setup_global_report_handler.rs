// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Installs the global [miette](https://docs.rs/miette/latest/miette/index.html) report
//! handler used by the `slider_switch_demo` binary when `main()` returns an error.

use miette::{MietteHandler, MietteHandlerOpts};
use tracing::debug;

/// Used when the terminal size can't be queried (eg: output is piped).
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Width of the terminal right now, or [`DEFAULT_REPORT_WIDTH`].
#[must_use]
pub fn report_width() -> usize {
    crossterm::terminal::size().map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| {
        usize::from(columns)
    })
}

/// Graphical, unicode, wrapped to `width`, with `issues_url` in the footer.
#[must_use]
pub fn create_report_handler(width: usize, issues_url: &str) -> MietteHandler {
    MietteHandlerOpts::new()
        .width(width)
        .wrap_lines(true)
        .force_graphical(true)
        .unicode(true)
        .with_cause_chain()
        .footer(format!("Please report bugs at: {issues_url}"))
        .build()
}

/// The hook runs lazily, so the terminal width is measured when a report is rendered,
/// not when this is called. Calling this more than once keeps the first hook.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    let result = miette::set_hook(Box::new(move |_report| {
        let width = report_width();
        debug!(message = "rendering miette report", width);
        Box::new(create_report_handler(width, issues_url))
    }));
    if result.is_err() {
        debug!(message = "miette report handler already installed");
    }
}
