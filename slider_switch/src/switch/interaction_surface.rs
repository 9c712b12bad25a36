// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Interaction surface
//!
//! The slider switch needs to hear about pointer releases and touch ends that happen
//! *anywhere*, not just over the control, so it can drop tab focus when the user
//! interacts elsewhere. Instead of reaching for a hidden global, the capability is
//! passed in as an [`InteractionSurface`].
//!
//! - [`InMemoryInteractionSurface`] is a complete implementation that hosts feed
//!   events into with [`InMemoryInteractionSurface::dispatch`]. Tests use it too.
//! - [`crate::CrosstermInteractionSurface`] wires it to terminal mouse events.
//!
//! Listeners are owned through a [`SurfaceSubscription`], an RAII guard that removes
//! every listener it installed exactly once, when it is released or dropped.

use std::{fmt::{Debug, Formatter},
          sync::{Arc, Mutex, MutexGuard}};

use smallvec::SmallVec;
use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::{Pos, lock_or_recover};

/// The global events that the focus tracker listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum GlobalEventKind {
    PointerRelease,
    TouchEnd,
}

/// A pointer or touch event delivered to every listener on the surface, regardless of
/// where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalPointerEvent {
    pub kind: GlobalEventKind,
    /// Where the event landed.
    pub target: Pos,
}

impl GlobalPointerEvent {
    #[must_use]
    pub fn pointer_release(target: Pos) -> Self {
        Self {
            kind: GlobalEventKind::PointerRelease,
            target,
        }
    }

    #[must_use]
    pub fn touch_end(target: Pos) -> Self {
        Self {
            kind: GlobalEventKind::TouchEnd,
            target,
        }
    }
}

pub type GlobalListener = Arc<dyn Fn(&GlobalPointerEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Something that global pointer / touch listeners can be attached to.
pub trait InteractionSurface: Send + Sync {
    fn add_listener(&self, kind: GlobalEventKind, listener: GlobalListener) -> ListenerId;

    /// Returns `false` if there was no listener with this `id`.
    fn remove_listener(&self, id: ListenerId) -> bool;

    fn listener_count(&self) -> usize;
}

pub type SharedInteractionSurface = Arc<dyn InteractionSurface>;

/// Owns a set of listeners on a surface. Dropping it removes them.
pub struct SurfaceSubscription {
    surface: SharedInteractionSurface,
    listener_ids: SmallVec<[ListenerId; 2]>,
}

impl SurfaceSubscription {
    /// Installs `listener` once for each of `kinds`.
    pub fn subscribe(
        surface: SharedInteractionSurface,
        kinds: &[GlobalEventKind],
        listener: &GlobalListener,
    ) -> Self {
        let listener_ids = kinds
            .iter()
            .map(|kind| {
                let id = surface.add_listener(*kind, listener.clone());
                debug!(message = "added global listener", ?kind, ?id);
                id
            })
            .collect();
        Self {
            surface,
            listener_ids,
        }
    }

    #[must_use]
    pub fn listener_ids(&self) -> &[ListenerId] { &self.listener_ids }

    /// Same as dropping, spelled out at call sites where the release point matters.
    pub fn release(self) { drop(self); }
}

impl Drop for SurfaceSubscription {
    fn drop(&mut self) {
        for id in self.listener_ids.drain(..) {
            let removed = self.surface.remove_listener(id);
            debug!(message = "removed global listener", ?id, removed);
        }
    }
}

impl Debug for SurfaceSubscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceSubscription")
            .field("listener_ids", &self.listener_ids)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(ListenerId, GlobalEventKind, GlobalListener)>,
}

/// Thread safe listener registry. Events are pushed in with [`Self::dispatch`].
#[derive(Default)]
pub struct InMemoryInteractionSurface {
    registry: Mutex<ListenerRegistry>,
}

impl InMemoryInteractionSurface {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn new_shared() -> Arc<Self> { Arc::new(Self::new()) }

    /// The registry holds no invariant that a panicking listener could break, so a
    /// poisoned lock is still usable.
    fn lock_registry(&self) -> MutexGuard<'_, ListenerRegistry> {
        lock_or_recover(&self.registry)
    }

    /// Calls every listener registered for `event.kind`, in registration order. The
    /// lock is not held while listeners run, so a listener may add or remove
    /// listeners. Returns how many listeners were called.
    pub fn dispatch(&self, event: &GlobalPointerEvent) -> usize {
        let matching: Vec<GlobalListener> = self
            .lock_registry()
            .listeners
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind)
            .map(|(_, _, listener)| listener.clone())
            .collect();
        for listener in &matching {
            listener(event);
        }
        matching.len()
    }
}

impl InteractionSurface for InMemoryInteractionSurface {
    fn add_listener(&self, kind: GlobalEventKind, listener: GlobalListener) -> ListenerId {
        let mut registry = self.lock_registry();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, kind, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut registry = self.lock_registry();
        let count_before = registry.listeners.len();
        registry.listeners.retain(|(it, _, _)| *it != id);
        registry.listeners.len() != count_before
    }

    fn listener_count(&self) -> usize { self.lock_registry().listeners.len() }
}

impl Debug for InMemoryInteractionSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryInteractionSurface")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}
