// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns user input (click, hover, key activation) into selection intents, commits
//! them through [`prop_sync::reconcile`], and fires the notification callback.
//!
//! [`InputDispatcher`] is a short lived view that borrows the pieces of a
//! [`crate::SliderSwitch`] it needs for a single event. The two notification paths
//! are ordered differently:
//!
//! | Path  | Order                                                               |
//! |-------|---------------------------------------------------------------------|
//! | click | notify with the clicked option's value, then commit                  |
//! | key   | commit (including the active value override), then notify with the committed value |

use std::fmt::{Debug, Formatter};

use strum_macros::Display;
use tracing::{debug, trace};

use super::{FocusTracker, OptionIndex, OptionValue, SelectionState, SwitchOptions,
            prop_sync};

/// Called with the value of the option the user picked.
pub type OnSwitchFn = Box<dyn FnMut(&OptionValue) + Send>;

/// What an intent emitted, if anything.
pub type Notification = Option<OptionValue>;

/// Keys as far as the switch is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SwitchKey {
    Enter,
    Spacebar,
    Other,
}

impl SwitchKey {
    #[must_use]
    pub fn is_activation(self) -> bool {
        matches!(self, SwitchKey::Enter | SwitchKey::Spacebar)
    }
}

/// Parses DOM style key identifiers. Only `"Enter"` and the legacy `"Spacebar"`
/// activate, so `" "` is [`SwitchKey::Other`].
impl From<&str> for SwitchKey {
    fn from(key: &str) -> Self {
        match key {
            "Enter" => SwitchKey::Enter,
            "Spacebar" => SwitchKey::Spacebar,
            _ => SwitchKey::Other,
        }
    }
}

/// Whether the host should go on to run the key's default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum KeyPropagation {
    /// Handled, suppress the default action.
    Consumed,
    /// Ignored, let the default action run.
    Propagate,
}

/// Result of [`InputDispatcher::on_key_activate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyActivation {
    pub propagation: KeyPropagation,
    pub notification: Notification,
}

impl KeyActivation {
    fn ignored() -> Self {
        Self {
            propagation: KeyPropagation::Propagate,
            notification: None,
        }
    }
}

pub struct InputDispatcher<'a> {
    pub options: &'a SwitchOptions,
    pub maybe_active_value: Option<&'a OptionValue>,
    pub selection: &'a mut SelectionState,
    pub focus_tracker: &'a FocusTracker,
    pub maybe_on_switch: Option<&'a mut OnSwitchFn>,
}

impl Debug for InputDispatcher<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputDispatcher")
            .field("options", &self.options)
            .field("maybe_active_value", &self.maybe_active_value)
            .field("selection", &self.selection)
            .field("has_on_switch", &self.maybe_on_switch.is_some())
            .finish_non_exhaustive()
    }
}

impl InputDispatcher<'_> {
    /// Every click notifies, even a click on the option that is already selected.
    pub fn on_click(&mut self, index: OptionIndex) -> Notification {
        let value = self.options.get(index).value.clone();
        self.notify(&value);
        let intent = self.selection.click(index);
        self.commit(intent, "click");
        Some(value)
    }

    pub fn on_hover(&mut self, index: OptionIndex) { self.focus_tracker.set_hover(index); }

    pub fn on_hover_end(&mut self) { self.focus_tracker.clear_hover(); }

    pub fn on_key_activate(&mut self, key: SwitchKey) -> KeyActivation {
        if !key.is_activation() {
            trace!(message = "key ignored", %key);
            return KeyActivation::ignored();
        }

        let intent = self.selection.activate_by_key();
        self.commit(intent, "key");

        let maybe_value = self.selection.selected_value(self.options).cloned();
        if let Some(value) = &maybe_value {
            self.notify(value);
        }
        KeyActivation {
            propagation: KeyPropagation::Consumed,
            notification: maybe_value,
        }
    }

    fn commit(&mut self, intent: SelectionState, source: &str) {
        let from = *self.selection;
        let to = prop_sync::reconcile(intent, self.options, self.maybe_active_value);
        *self.selection = to;
        debug!(message = "selection committed", source, %from, %intent, %to);
    }

    fn notify(&mut self, value: &OptionValue) {
        debug!(message = "notify on_switch", %value);
        if let Some(on_switch) = self.maybe_on_switch.as_deref_mut() {
            on_switch(value);
        }
    }
}
