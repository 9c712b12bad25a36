// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Opens `file_path` for appending, creating it and its folder if needed. The file
/// never rotates. A bare file name (eg: `log.txt`) lands in the current folder.
///
/// The appender is used as a blocking writer. Wrapping it in
/// `tracing_appender::non_blocking` would need the worker guard to outlive the
/// subscriber, which a global subscriber can't guarantee.
///
/// # Errors
///
/// Returns an error if `file_path` has no file name, or if the file or its folder
/// can't be created.
pub fn try_create(file_path: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(file_path);
    let (Some(folder), Some(file_name)) = (path.parent(), path.file_name()) else {
        miette::bail!("Log file path `{file_path}` doesn't name a file");
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(folder)
        .into_diagnostic()
}
