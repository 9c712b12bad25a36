// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_slider_switch
//!
//! A binary exclusive choice control: two options, at most one selected, with an
//! "unset" state until the user picks one. Think of an `On | Off` slider in a form.
//!
//! ```text
//! ╭──────────────────────────────────────────────────────────╮
//! │ SliderSwitch                                             │
//! │                                                          │
//! │  click / key ──▶ InputDispatcher ──▶ SelectionState      │
//! │                        │                   ▲             │
//! │                        │ on_switch(value)  │ active value│
//! │                        ▼                   │             │
//! │                      host ─────────▶ PropSync            │
//! │                                                          │
//! │  focus / blur / hover ─────────▶ FocusTracker            │
//! │  global pointer release ──▶ InteractionSurface ──╯       │
//! ╰──────────────────────────────────────────────────────────╯
//! ```
//!
//! - [`SelectionState`] is a pure state machine (`Unset`, `First`, `Second`).
//! - [`InputDispatcher`] maps clicks and `Enter` / `Spacebar` to transitions and calls
//!   the host's `on_switch` callback with the picked option's value.
//! - [`prop_sync`](switch::prop_sync) makes the switch *controlled* when the host
//!   supplies an active value. That value always wins over local transitions.
//! - [`FocusTracker`] keeps tab focus and hover, and while mounted drops tab focus
//!   when a pointer is released outside the control's [`Bounds`].
//! - [`InteractionSurface`] is the injected source of global pointer events.
//!   [`CrosstermInteractionSurface`] feeds it from a terminal.
//!
//! # Example
//!
//! ```
//! use r3bl_slider_switch::{InMemoryInteractionSurface, SelectionState, SliderSwitch,
//!                          SliderSwitchProps, SwitchKey, SwitchOption, SwitchOptions};
//!
//! # fn main() -> miette::Result<()> {
//! let options = SwitchOptions::new(SwitchOption::new("On", 1), SwitchOption::new("Off", 0));
//! let props = SliderSwitchProps::new(options)
//!     .with_name("power")
//!     .with_on_switch(|value| println!("switched to {value}"));
//!
//! let mut switch = SliderSwitch::new(props);
//! switch.mount(InMemoryInteractionSurface::new_shared())?;
//!
//! switch.on_key_activate(SwitchKey::Enter);
//! assert_eq!(switch.selection_state(), SelectionState::First);
//!
//! switch.unmount();
//! # Ok(())
//! # }
//! ```
//!
//! Run the terminal demo with `cargo run --bin slider_switch_demo -- --help`.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod switch;
pub mod terminal_backend;

// Re-export.
pub use core::*;
pub use switch::*;
pub use terminal_backend::*;
