// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Selection transitions never fail. The only fallible operations live at the
//! caller-facing boundary of the control: building the option pair, indexing into it,
//! loading props from JSON, and mounting the focus tracker twice.

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`SwitchError`] and any other type of error.
///
/// # Example
///
/// ```
/// use r3bl_slider_switch::{CommonResult, SwitchError};
///
/// fn pick(index: usize) -> CommonResult<usize> {
///     if index > 1 {
///         return Err(SwitchError::OptionIndexOutOfRange { index }.into());
///     }
///     Ok(index)
/// }
///
/// assert!(pick(0).is_ok());
/// assert!(pick(2).is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Errors that can occur at the boundary of the slider switch control.
///
/// Each variant carries a [diagnostic code] so that the global miette report handler
/// can render it nicely in the demo binary.
///
/// [diagnostic code]: miette::Diagnostic::code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SwitchError {
    /// A slider switch must be created with exactly two options.
    #[error("A slider switch needs exactly 2 options, got {count}")]
    #[diagnostic(
        code(r3bl_slider_switch::invalid_option_count),
        help("Pass exactly two options, eg: `[On, Off]`.")
    )]
    InvalidOptionCount { count: usize },

    /// Option indices are `0` (first) or `1` (second).
    #[error("Option index {index} is out of range, it must be 0 or 1")]
    #[diagnostic(code(r3bl_slider_switch::option_index_out_of_range))]
    OptionIndexOutOfRange { index: usize },

    /// The global pointer / touch listeners are already installed for this control.
    #[error("The slider switch is already mounted on an interaction surface")]
    #[diagnostic(
        code(r3bl_slider_switch::already_mounted),
        help("Call `unmount()` before mounting the control again.")
    )]
    AlreadyMounted,

    /// The props JSON could not be parsed.
    #[error("Could not parse slider switch props from JSON: {reason}")]
    #[diagnostic(code(r3bl_slider_switch::invalid_props_json))]
    InvalidPropsJson { reason: String },
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_switch_error_display() {
        assert_eq2!(
            SwitchError::InvalidOptionCount { count: 1 }.to_string(),
            "A slider switch needs exactly 2 options, got 1"
        );
        assert_eq2!(
            SwitchError::OptionIndexOutOfRange { index: 7 }.to_string(),
            "Option index 7 is out of range, it must be 0 or 1"
        );
    }

    #[test]
    fn test_switch_error_has_diagnostic_code() {
        let code = SwitchError::AlreadyMounted.code().map(|it| it.to_string());
        assert_eq2!(code, Some("r3bl_slider_switch::already_mounted".to_string()));
    }

    #[test]
    fn test_switch_error_converts_into_report() {
        let result: CommonResult<()> = Err(SwitchError::AlreadyMounted.into());
        let report = result.unwrap_err();
        assert_eq2!(
            report.downcast_ref::<SwitchError>(),
            Some(&SwitchError::AlreadyMounted)
        );
    }
}
