// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Slider switch
//!
//! A two option exclusive choice control. [`SliderSwitch`] composes:
//!
//! 1. [`SelectionState`], the local selection.
//! 2. [`prop_sync`], which lets an externally supplied active value override it.
//! 3. [`InputDispatcher`], which turns clicks and keys into selection changes and
//!    notifications.
//! 4. [`FocusTracker`], which owns tab focus and hover, and drops tab focus on pointer
//!    releases outside the control while mounted.
//!
//! The host owns the switch, calls [`SliderSwitch::mount`] once it has an
//! [`InteractionSurface`](super::InteractionSurface) to attach to, feeds input with the
//! `on_*` methods or [`SliderSwitch::handle_input_event`], and draws from
//! [`SliderSwitch::view_state`].
//!
//! ```
//! use r3bl_slider_switch::{OptionIndex, SliderSwitch, SliderSwitchProps, SwitchOption,
//!                          SwitchOptions};
//!
//! let options = SwitchOptions::new(SwitchOption::new("On", 1), SwitchOption::new("Off", 0));
//! let mut switch = SliderSwitch::new(SliderSwitchProps::new(options).with_name("power"));
//! assert_eq!(switch.hidden_input().value, "");
//!
//! switch.on_click(OptionIndex::Second);
//! assert_eq!(switch.hidden_input().value, "0");
//! assert!(switch.view_state().second_active);
//! ```

use std::fmt::{Debug, Formatter};

use crossterm::event::Event;
use serde::Deserialize;
use tracing::debug;

use super::{ActiveValue, FocusMode, FocusState, FocusTracker, InputDispatcher,
            KeyActivation, KeyPropagation, Notification, OnSwitchFn, OptionIndex,
            OptionValue, SelectionState, SharedInteractionSurface, SwitchKey,
            SwitchOptions, prop_sync};
use crate::{Bounds, CommonResult, Pos, SwitchError, SwitchInput, ok};

/// Everything the host supplies. All fields except `options` and `on_switch` can be
/// loaded from JSON with [`SliderSwitchProps::try_from_json`].
#[derive(Deserialize)]
pub struct SliderSwitchProps {
    pub options: SwitchOptions,
    /// Form field name of the hidden input.
    #[serde(default)]
    pub name: String,
    /// When supplied (not `None`, not `""`), the switch is controlled by it.
    #[serde(default)]
    pub active_value: ActiveValue,
    #[serde(skip)]
    pub on_switch: Option<OnSwitchFn>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub tab_index: i32,
    #[serde(default)]
    pub focus_mode: FocusMode,
}

impl SliderSwitchProps {
    #[must_use]
    pub fn new(options: SwitchOptions) -> Self {
        Self {
            options,
            name: String::new(),
            active_value: None,
            on_switch: None,
            class_name: None,
            tab_index: 0,
            focus_mode: FocusMode::default(),
        }
    }

    /// # Errors
    ///
    /// [`SwitchError::InvalidPropsJson`] if the JSON is malformed or doesn't have
    /// exactly two options.
    pub fn try_from_json(json: &str) -> CommonResult<Self> {
        let props = serde_json::from_str(json).map_err(|err| SwitchError::InvalidPropsJson {
            reason: err.to_string(),
        })?;
        ok!(props)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_active_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.active_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_on_switch(mut self, on_switch: impl FnMut(&OptionValue) + Send + 'static) -> Self {
        self.on_switch = Some(Box::new(on_switch));
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    #[must_use]
    pub fn with_focus_mode(mut self, focus_mode: FocusMode) -> Self {
        self.focus_mode = focus_mode;
        self
    }
}

impl Debug for SliderSwitchProps {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderSwitchProps")
            .field("options", &self.options)
            .field("name", &self.name)
            .field("active_value", &self.active_value)
            .field("on_switch", &self.on_switch.as_ref().map(|_| "FnMut(&OptionValue)"))
            .field("class_name", &self.class_name)
            .field("tab_index", &self.tab_index)
            .field("focus_mode", &self.focus_mode)
            .finish()
    }
}

/// The form submission value of the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenInput {
    pub name: String,
    /// Selected option's value as text, or empty when nothing is selected.
    pub value: String,
}

/// Everything a renderer needs to draw the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchViewState {
    pub first_label: String,
    pub second_label: String,
    pub first_active: bool,
    pub second_active: bool,
    pub first_hovered: bool,
    pub second_hovered: bool,
    pub has_tab_focus: bool,
    /// Nothing is selected, draw the "unset" border.
    pub show_unset_border: bool,
    pub class_name: Option<String>,
    pub tab_index: i32,
}

#[derive(Debug)]
pub struct SliderSwitch {
    props: SliderSwitchProps,
    selection: SelectionState,
    focus_tracker: FocusTracker,
}

impl SliderSwitch {
    /// The initial selection comes from the options' `selected` hints, then the active
    /// value (if supplied) overrides it.
    #[must_use]
    pub fn new(props: SliderSwitchProps) -> Self {
        let initial = SelectionState::from_options(&props.options);
        let selection =
            prop_sync::reconcile(initial, &props.options, props.active_value.as_ref());
        debug!(message = "slider switch created", name = %props.name, %initial, %selection);
        Self {
            focus_tracker: FocusTracker::new(props.focus_mode),
            props,
            selection,
        }
    }

    #[must_use]
    pub fn props(&self) -> &SliderSwitchProps { &self.props }

    /// Replaces the props. The options' `selected` hints are not read again, the
    /// current selection is kept unless the new active value overrides it.
    pub fn set_props(&mut self, props: SliderSwitchProps) {
        self.focus_tracker.set_focus_mode(props.focus_mode);
        self.props = props;
        self.sync_active_value();
    }

    pub fn set_active_value(&mut self, active_value: ActiveValue) {
        self.props.active_value = active_value;
        self.sync_active_value();
    }

    fn sync_active_value(&mut self) {
        let from = self.selection;
        self.selection =
            prop_sync::reconcile(from, &self.props.options, self.props.active_value.as_ref());
        debug!(message = "props synced", %from, to = %self.selection);
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState { self.selection }

    #[must_use]
    pub fn selected_value(&self) -> Option<&OptionValue> {
        self.selection.selected_value(&self.props.options)
    }

    #[must_use]
    pub fn focus_state(&self) -> FocusState { self.focus_tracker.focus_state() }

    #[must_use]
    pub fn focus_tracker(&self) -> &FocusTracker { &self.focus_tracker }

    fn dispatcher(&mut self) -> InputDispatcher<'_> {
        InputDispatcher {
            options: &self.props.options,
            maybe_active_value: self.props.active_value.as_ref(),
            selection: &mut self.selection,
            focus_tracker: &self.focus_tracker,
            maybe_on_switch: self.props.on_switch.as_mut(),
        }
    }

    pub fn on_click(&mut self, index: OptionIndex) -> Notification {
        self.dispatcher().on_click(index)
    }

    pub fn on_hover(&mut self, index: OptionIndex) { self.dispatcher().on_hover(index); }

    pub fn on_hover_end(&mut self) { self.dispatcher().on_hover_end(); }

    pub fn on_key_activate(&mut self, key: SwitchKey) -> KeyActivation {
        self.dispatcher().on_key_activate(key)
    }

    pub fn on_focus(&self) { self.focus_tracker.on_focus(); }

    pub fn on_blur(&self) { self.focus_tracker.on_blur(); }

    pub fn toggle_focus(&self) { self.focus_tracker.toggle_focus(); }

    /// Attaches the outside click listeners. No notification fires.
    ///
    /// # Errors
    ///
    /// [`SwitchError::AlreadyMounted`] if already mounted.
    pub fn mount(&mut self, surface: SharedInteractionSurface) -> CommonResult<()> {
        self.focus_tracker.start(surface)?;
        debug!(message = "slider switch mounted", name = %self.props.name);
        ok!()
    }

    /// Detaches the listeners. Safe to call when not mounted. Returns whether it was
    /// mounted.
    pub fn unmount(&mut self) -> bool {
        let was_mounted = self.focus_tracker.stop();
        if was_mounted {
            debug!(message = "slider switch unmounted", name = %self.props.name);
        }
        was_mounted
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool { self.focus_tracker.is_started() }

    /// Where the control is drawn. The left half is the first option, the right half
    /// the second.
    pub fn set_boundary(&self, maybe_bounds: Option<Bounds>) {
        self.focus_tracker.set_boundary(maybe_bounds);
    }

    /// Which option's half of the boundary `pos` is in.
    #[must_use]
    pub fn option_at(&self, pos: Pos) -> Option<OptionIndex> {
        let (first_half, second_half) = self.focus_tracker.boundary()?.split_halves();
        if first_half.contains(pos) {
            Some(OptionIndex::First)
        } else if second_half.contains(pos) {
            Some(OptionIndex::Second)
        } else {
            None
        }
    }

    #[must_use]
    pub fn hidden_input(&self) -> HiddenInput {
        HiddenInput {
            name: self.props.name.clone(),
            value: self
                .selected_value()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn view_state(&self) -> SwitchViewState {
        let focus_state = self.focus_state();
        SwitchViewState {
            first_label: self.props.options.first().name.clone(),
            second_label: self.props.options.second().name.clone(),
            first_active: self.selection.is_first_selected(),
            second_active: self.selection.is_second_selected(),
            first_hovered: focus_state.hover_index.is_hovered(OptionIndex::First),
            second_hovered: focus_state.hover_index.is_hovered(OptionIndex::Second),
            has_tab_focus: focus_state.has_tab_focus,
            show_unset_border: self.selection.is_unset(),
            class_name: self.props.class_name.clone(),
            tab_index: self.props.tab_index,
        }
    }

    /// Routes one terminal event. Only keys can be consumed, everything else returns
    /// [`KeyPropagation::Propagate`]. Pointer releases are not handled here, feed those
    /// to the interaction surface the switch is mounted on.
    pub fn handle_input_event(&mut self, event: &Event) -> KeyPropagation {
        match SwitchInput::from(event) {
            SwitchInput::Key(key) => return self.on_key_activate(key).propagation,
            SwitchInput::MouseDown(pos) => {
                if let Some(index) = self.option_at(pos) {
                    self.on_click(index);
                }
            }
            SwitchInput::MouseMove(pos) => match self.option_at(pos) {
                Some(index) => self.on_hover(index),
                None => self.on_hover_end(),
            },
            SwitchInput::FocusGained => self.on_focus(),
            SwitchInput::FocusLost => self.on_blur(),
            SwitchInput::MouseUp(_) | SwitchInput::Ignored => {}
        }
        KeyPropagation::Propagate
    }
}

impl Drop for SliderSwitch {
    fn drop(&mut self) { self.unmount(); }
}
