// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crossterm::event::Event;

use super::SwitchInput;
use crate::{GlobalEventKind, GlobalListener, GlobalPointerEvent, InMemoryInteractionSurface,
            InteractionSurface, ListenerId};

/// An [`InteractionSurface`] fed from the terminal's event stream. Every mouse button
/// release anywhere on screen becomes a [`GlobalEventKind::PointerRelease`]. A
/// terminal has no touch input, so [`GlobalEventKind::TouchEnd`] listeners are
/// registered but never called from here.
///
/// Mouse capture must be enabled (`crossterm::event::EnableMouseCapture`) for release
/// events to arrive at all.
#[derive(Debug, Default)]
pub struct CrosstermInteractionSurface {
    inner: InMemoryInteractionSurface,
}

impl CrosstermInteractionSurface {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn new_shared() -> Arc<Self> { Arc::new(Self::new()) }

    /// Forwards `event` to listeners if it is a global pointer event. Returns how many
    /// listeners were called.
    pub fn dispatch_crossterm_event(&self, event: &Event) -> usize {
        match SwitchInput::from(event) {
            SwitchInput::MouseUp(pos) => {
                self.inner.dispatch(&GlobalPointerEvent::pointer_release(pos))
            }
            _ => 0,
        }
    }
}

impl InteractionSurface for CrosstermInteractionSurface {
    fn add_listener(&self, kind: GlobalEventKind, listener: GlobalListener) -> ListenerId {
        self.inner.add_listener(kind, listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool { self.inner.remove_listener(id) }

    fn listener_count(&self) -> usize { self.inner.listener_count() }
}
