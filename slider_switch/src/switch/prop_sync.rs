// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reconciles the externally supplied "active value" with the local
//! [`SelectionState`]. When a value is supplied the switch is *controlled*: the
//! selection is recomputed from that value after every update, and any local
//! transition is discarded.

use super::{OptionValue, SelectionState, SwitchOptions};

/// The externally supplied value, as the host hands it over. See
/// [`supplied_active_value`] for what counts as "supplied".
pub type ActiveValue = Option<OptionValue>;

/// Returns the supplied active value, treating `None` and the empty string as "not
/// supplied".
#[must_use]
pub fn supplied_active_value(maybe_active_value: Option<&OptionValue>) -> Option<&OptionValue> {
    maybe_active_value.filter(|it| !it.is_empty())
}

/// `Some(state)` when the switch is controlled, `None` when local state is the source
/// of truth.
#[must_use]
pub fn resolve_active_value(
    options: &SwitchOptions,
    maybe_active_value: Option<&OptionValue>,
) -> Option<SelectionState> {
    supplied_active_value(maybe_active_value)
        .map(|value| SelectionState::Unset.set_external(options, value))
}

/// Applies [`resolve_active_value`] on top of `local`. This is what runs at the end of
/// every update cycle.
#[must_use]
pub fn reconcile(
    local: SelectionState,
    options: &SwitchOptions,
    maybe_active_value: Option<&OptionValue>,
) -> SelectionState {
    resolve_active_value(options, maybe_active_value).unwrap_or(local)
}
