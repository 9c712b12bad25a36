// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Focus tracking
//!
//! [`FocusTracker`] owns the [`FocusState`] of one slider switch, and while it is
//! started, a [`SurfaceSubscription`] with two global listeners (pointer release and
//! touch end). When either fires outside the switch's [`Bounds`] while the switch has
//! tab focus, tab focus is dropped. The selection is never touched from here.
//!
//! The focus state is shared with the listeners, which may run on whichever thread
//! drives the [`InteractionSurface`], so it lives behind an `Arc<Mutex<_>>`.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::debug;

use super::{FocusState, GlobalEventKind, GlobalListener, GlobalPointerEvent, HoverIndex,
            OptionIndex, SharedInteractionSurface, SurfaceSubscription};
use crate::{Bounds, CommonResult, SwitchError, lock_or_recover};

/// How focus and blur notifications change [`FocusState::has_tab_focus`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    /// Both focus and blur flip the flag. An unpaired focus or blur leaves it inverted
    /// until the next one arrives.
    #[default]
    Flip,
    /// Focus sets the flag, blur clears it.
    Explicit,
}

pub type SharedFocusState = Arc<Mutex<FocusState>>;
pub type SharedBoundary = Arc<Mutex<Option<Bounds>>>;

/// The listener kinds installed by [`FocusTracker::start`].
pub const TRACKED_GLOBAL_EVENTS: [GlobalEventKind; 2] =
    [GlobalEventKind::PointerRelease, GlobalEventKind::TouchEnd];

#[derive(Debug, Default)]
pub struct FocusTracker {
    focus_mode: FocusMode,
    focus_state: SharedFocusState,
    boundary: SharedBoundary,
    maybe_subscription: Option<SurfaceSubscription>,
}

impl FocusTracker {
    #[must_use]
    pub fn new(focus_mode: FocusMode) -> Self {
        Self {
            focus_mode,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn focus_mode(&self) -> FocusMode { self.focus_mode }

    pub fn set_focus_mode(&mut self, focus_mode: FocusMode) { self.focus_mode = focus_mode; }

    /// Snapshot of the current focus and hover state.
    #[must_use]
    pub fn focus_state(&self) -> FocusState { *lock_or_recover(&self.focus_state) }

    #[must_use]
    pub fn has_tab_focus(&self) -> bool { self.focus_state().has_tab_focus }

    #[must_use]
    pub fn is_started(&self) -> bool { self.maybe_subscription.is_some() }

    /// Installs the global listeners on `surface`.
    ///
    /// # Errors
    ///
    /// [`SwitchError::AlreadyMounted`] if the tracker is already started. Call
    /// [`Self::stop`] first.
    pub fn start(&mut self, surface: SharedInteractionSurface) -> CommonResult<()> {
        if self.is_started() {
            return Err(SwitchError::AlreadyMounted.into());
        }

        let focus_state = self.focus_state.clone();
        let boundary = self.boundary.clone();
        let listener: GlobalListener = Arc::new(move |event: &GlobalPointerEvent| {
            clear_focus_if_outside(&focus_state, &boundary, event);
        });

        self.maybe_subscription = Some(SurfaceSubscription::subscribe(
            surface,
            &TRACKED_GLOBAL_EVENTS,
            &listener,
        ));
        debug!(message = "focus tracker started");
        Ok(())
    }

    /// Removes the global listeners. Does nothing if not started. Returns whether
    /// anything was removed.
    pub fn stop(&mut self) -> bool {
        match self.maybe_subscription.take() {
            Some(subscription) => {
                subscription.release();
                debug!(message = "focus tracker stopped");
                true
            }
            None => false,
        }
    }

    /// Where the switch is on screen. `None` means unknown, and then no global event
    /// counts as outside.
    pub fn set_boundary(&self, maybe_bounds: Option<Bounds>) {
        *lock_or_recover(&self.boundary) = maybe_bounds;
    }

    #[must_use]
    pub fn boundary(&self) -> Option<Bounds> { *lock_or_recover(&self.boundary) }

    /// Flips `has_tab_focus`.
    pub fn toggle_focus(&self) {
        let mut state = lock_or_recover(&self.focus_state);
        state.has_tab_focus = !state.has_tab_focus;
        debug!(message = "toggle focus", has_tab_focus = state.has_tab_focus);
    }

    pub fn on_focus(&self) {
        match self.focus_mode {
            FocusMode::Flip => self.toggle_focus(),
            FocusMode::Explicit => self.set_tab_focus(true),
        }
    }

    pub fn on_blur(&self) {
        match self.focus_mode {
            FocusMode::Flip => self.toggle_focus(),
            FocusMode::Explicit => self.set_tab_focus(false),
        }
    }

    fn set_tab_focus(&self, has_tab_focus: bool) {
        lock_or_recover(&self.focus_state).has_tab_focus = has_tab_focus;
        debug!(message = "set focus", has_tab_focus);
    }

    pub fn set_hover(&self, index: OptionIndex) {
        lock_or_recover(&self.focus_state).hover_index = index.into();
    }

    pub fn clear_hover(&self) {
        lock_or_recover(&self.focus_state).hover_index = HoverIndex::None;
    }

    /// Same check the installed listeners run. Hosts that route global events by hand
    /// can call it directly. Returns `true` if tab focus was dropped.
    pub fn handle_global_event(&self, event: &GlobalPointerEvent) -> bool {
        clear_focus_if_outside(&self.focus_state, &self.boundary, event)
    }
}

fn clear_focus_if_outside(
    focus_state: &Mutex<FocusState>,
    boundary: &Mutex<Option<Bounds>>,
    event: &GlobalPointerEvent,
) -> bool {
    let Some(bounds) = *lock_or_recover(boundary) else {
        return false;
    };
    if bounds.contains(event.target) {
        return false;
    }

    let mut state = lock_or_recover(focus_state);
    if !state.has_tab_focus {
        return false;
    }
    state.has_tab_focus = false;
    debug!(message = "global event outside switch, dropping tab focus", kind = %event.kind, target = ?event.target);
    true
}
